//! Built-in SANS incident-response reference taxonomy.
//!
//! Six phases, five example activities each. Used whenever no taxonomy
//! file is configured.

use crate::model::{Phase, PhaseEntry, Taxonomy};

const REFERENCE: [(Phase, &str, [&str; 5]); 6] = [
    (
        Phase::Preparation,
        "This phase involves making the system ready for a potential incident by implementing and testing defenses. It's about being proactive.",
        [
            "Developing and documenting an incident response plan.",
            "Establishing a formal incident response team with defined roles.",
            "Acquiring and deploying security tools (e.g., EDR, SIEM, SOAR).",
            "Conducting regular security awareness training for all employees.",
            "Performing periodic risk assessments to identify vulnerabilities.",
        ],
    ),
    (
        Phase::Identification,
        "This phase involves detecting a deviation from normal operations and determining if it is a security incident.",
        [
            "Analyzing unusual log entries from a firewall or web server.",
            "Receiving an alert from an Intrusion Detection System (IDS).",
            "Noticing a sudden and unexplained increase in network traffic to a foreign country.",
            "A user reporting a suspicious email containing a weird attachment.",
            "Observing system files being modified or encrypted unexpectedly.",
        ],
    ),
    (
        Phase::Containment,
        "The goal of this phase is to limit the scope and magnitude of the incident and to prevent further damage.",
        [
            "Isolating an infected laptop from the corporate network.",
            "Blocking a malicious IP address at the perimeter firewall.",
            "Temporarily disabling a compromised user account.",
            "Implementing network segmentation to stop an attack's lateral movement.",
            "Taking a compromised web server offline for forensic analysis.",
        ],
    ),
    (
        Phase::Eradication,
        "This phase focuses on completely removing the threat from the environment to ensure the attacker cannot regain access.",
        [
            "Deleting malware and associated files from all affected systems.",
            "Patching the vulnerabilities that were exploited during the attack.",
            "Resetting all compromised user and service account passwords.",
            "Rebuilding a compromised system from a known good, trusted backup.",
            "Searching for and removing any backdoors or persistence mechanisms left by the attacker.",
        ],
    ),
    (
        Phase::Recovery,
        "This phase involves carefully restoring systems to normal operation and monitoring to ensure the incident is truly resolved.",
        [
            "Restoring data from clean, verified backups.",
            "Bringing cleaned and patched systems back online in a phased manner.",
            "Validating that the restored systems are functioning as expected.",
            "Intensively monitoring network and system logs for any signs of reinfection or unusual activity.",
            "Communicating to stakeholders that the system is back to normal operation.",
        ],
    ),
    (
        Phase::LessonsLearned,
        "This final phase involves analyzing the incident and the response to identify areas for improvement. This is a critical step for maturing the security posture.",
        [
            "Conducting a post-incident review meeting with all involved parties.",
            "Documenting a detailed incident timeline, from initial detection to full resolution.",
            "Analyzing the root cause of the incident to prevent recurrence.",
            "Updating the incident response plan and procedures based on what was learned.",
            "Identifying gaps in security controls and recommending new tools or policies.",
        ],
    ),
];

impl Taxonomy {
    /// The SANS reference taxonomy.
    pub fn reference() -> Self {
        let entries = REFERENCE
            .iter()
            .map(|(phase, description, activities)| {
                PhaseEntry::new(*phase, *description, activities.iter().copied())
            })
            .collect();
        // REFERENCE lists each phase once, already in canonical order.
        Self::from_sorted_unchecked(entries)
    }
}
