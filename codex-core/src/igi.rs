//! Project IGI roster.
//!
//! Nine characters from Project IGI: the protagonist, his mission support,
//! the Priboi arms-dealing family, the antagonist Ekk, and Captain
//! Harrison's allied squad. Records are authored in display order.

use crate::character::{Ability, Character};
use std::sync::LazyLock;

static ROSTER: LazyLock<Vec<Character>> = LazyLock::new(build_roster);

/// The full roster, in authored order.
pub fn characters() -> &'static [Character] {
    &ROSTER
}

/// Look up a character by display name (case-insensitive).
pub fn get(name: &str) -> Option<&'static Character> {
    ROSTER.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn build_roster() -> Vec<Character> {
    vec![
        Character {
            name: "David Jones".to_string(),
            img: Some("./igicharacters/davidjones.png".to_string()),
            description: Some(
                "David Jones is a former SAS soldier turned freelance operative. As the protagonist of Project IGI, he is tasked with infiltrating enemy bases, gathering intelligence, and neutralizing high-value targets. Skilled in stealth, firearms, and tactical planning, Jones is a one-man army against global threats.".to_string(),
            ),
            actor: Some("Stephen Critchlow".to_string()),
            abilities: Some(vec![
                Ability::new(
                    "Stealth Operations",
                    "Jones excels in stealth missions, using silent takedowns and evasion techniques to remain undetected.",
                ),
                Ability::new(
                    "Advanced Weapons Handling",
                    "Trained in various firearms and explosives, Jones is proficient in both close-quarters combat and long-range engagements.",
                ),
                Ability::new(
                    "Hacking and Infiltration",
                    "Capable of bypassing security systems and hacking terminals to gain access to restricted areas.",
                ),
            ]),
            trivia: Some(lines(&[
                "David Jones' character was inspired by real-life covert operatives and SAS training techniques.",
                "He rarely speaks during missions, preferring to let his actions do the talking.",
                "The character's design was influenced by action movies of the late '90s and early 2000s.",
            ])),
            history: Some(lines(&[
                "Jones is assigned to retrieve stolen nuclear technology and prevent it from falling into enemy hands.",
                "He partners with Anya, an intelligence officer, who provides crucial mission support and information.",
                "Throughout his missions, Jones uncovers a deeper conspiracy involving rogue military factions and arms dealers.",
            ])),
            ..Default::default()
        },
        Character {
            name: "Anya".to_string(),
            img: Some("./igicharacters/anya.png".to_string()),
            description: Some(
                "Anya is a top intelligence officer who provides mission briefings, tactical support, and strategic insights to David Jones. She serves as his main point of contact throughout his operations, guiding him through dangerous territories and enemy compounds.".to_string(),
            ),
            actor: Some("Kim Romer".to_string()),
            abilities: Some(vec![
                Ability::new(
                    "Mission Coordination",
                    "Anya provides real-time intelligence and strategic updates, ensuring Jones has the necessary information to complete objectives.",
                ),
                Ability::new(
                    "Surveillance and Reconnaissance",
                    "Using satellite feeds and advanced tracking systems, Anya monitors enemy movements and potential threats.",
                ),
                Ability::new(
                    "Cybersecurity Expertise",
                    "She can hack into enemy communications, disrupt security systems, and decrypt classified documents.",
                ),
            ]),
            trivia: Some(lines(&[
                "Anya's voice and character design were updated in later versions of Project IGI.",
                "She plays a crucial role in guiding the player through the toughest missions.",
                "Unlike Jones, Anya rarely engages in direct combat but is vital for intelligence gathering.",
            ])),
            history: Some(lines(&[
                "Anya assists Jones in tracking down stolen nuclear components and uncovering terrorist plots.",
                "She works closely with intelligence agencies, providing crucial data to prevent global conflicts.",
                "Throughout the missions, she and Jones develop a strong professional bond, relying on each other to survive and succeed.",
            ])),
            ..Default::default()
        },
        Character {
            name: "Jach Priboi".to_string(),
            img: Some("./igicharacters/Jack_Priboi.jpg".to_string()),
            description: Some(
                "Jach Priboi is a Soviet arms dealer and the uncle of Josef Priboi. He is a central figure in the game's plot, as his dealings and connections are pivotal to the unfolding events.".to_string(),
            ),
            actor: Some("Unknown".to_string()),
            abilities: Some(vec![
                Ability::new(
                    "Arms Dealing",
                    "Jach has extensive networks and knowledge in the black market arms trade.",
                ),
                Ability::new(
                    "Strategic Planning",
                    "He is adept at orchestrating complex deals and evading law enforcement.",
                ),
            ]),
            trivia: Some(lines(&[
                "Jach Priboi's character adds depth to the game's narrative, representing the intricate world of arms trading.",
                "His interactions with other characters drive much of the game's storyline.",
            ])),
            history: Some(lines(&[
                "Jach's arms dealings attract the attention of international intelligence agencies.",
                "His relationship with his nephew, Josef, complicates the dynamics of the game's events.",
            ])),
            ..Default::default()
        },
        Character {
            name: "Josef Priboi".to_string(),
            img: Some("./igicharacters/Josef_Priboi.png".to_string()),
            description: Some(
                "Josef Priboi is the nephew of Jach Priboi and is involved in his uncle's arms dealing operations. He becomes a person of interest due to his knowledge of stolen nuclear warheads.".to_string(),
            ),
            actor: Some("Unknown".to_string()),
            abilities: Some(vec![
                Ability::new(
                    "Information Brokerage",
                    "Josef possesses critical information about illicit arms deals and stolen weaponry.",
                ),
                Ability::new(
                    "Evasion",
                    "Skilled in avoiding capture, Josef employs various tactics to stay under the radar.",
                ),
            ]),
            trivia: Some(lines(&[
                "Josef's capture and interrogation are key objectives in the game's early missions.",
                "His knowledge serves as a catalyst for the protagonist's subsequent missions.",
            ])),
            history: Some(lines(&[
                "Josef's involvement in arms dealing leads to his capture by military forces.",
                "Information extracted from Josef sets the protagonist on a path to uncover larger threats.",
            ])),
            ..Default::default()
        },
        Character {
            name: "Ekk".to_string(),
            img: Some("./igicharacters/Ekk.png".to_string()),
            description: Some(
                "Ekk is a homicidal Russian woman with intentions to initiate nuclear warfare in Europe. She serves as one of the primary antagonists in the game.".to_string(),
            ),
            actor: Some("Unknown".to_string()),
            abilities: Some(vec![
                Ability::new(
                    "Leadership",
                    "Ekk commands a group of loyal followers and orchestrates complex operations.",
                ),
                Ability::new(
                    "Strategic Warfare",
                    "She has a deep understanding of nuclear weapons and their deployment.",
                ),
            ]),
            trivia: Some(lines(&[
                "Ekk's motivations are driven by a desire to reshape the geopolitical landscape.",
                "Her confrontations with the protagonist are among the game's most challenging encounters.",
            ])),
            history: Some(lines(&[
                "Ekk's plans involve the acquisition and deployment of nuclear warheads.",
                "She engages in multiple confrontations with the protagonist, showcasing her tactical prowess.",
            ])),
            ..Default::default()
        },
        Character {
            name: "Captain Harrison".to_string(),
            img: Some("./igicharacters/Harrison.png".to_string()),
            description: Some(
                "Captain Harrison is a commander of allied troops and an ex-Green Beret in the US Army Special Forces. He provides support to the protagonist during various missions.".to_string(),
            ),
            actor: Some("Unknown".to_string()),
            abilities: Some(vec![
                Ability::new(
                    "Tactical Command",
                    "Harrison excels in leading troops and coordinating military operations.",
                ),
                Ability::new(
                    "Combat Support",
                    "He offers essential backup and resources during critical mission phases.",
                ),
            ]),
            trivia: Some(lines(&[
                "Captain Harrison's military background complements the protagonist's skill set.",
                "His presence provides a sense of camaraderie and support in hostile environments.",
            ])),
            history: Some(lines(&[
                "Harrison collaborates with the protagonist to thwart Ekk's nuclear ambitions.",
                "His strategic insights prove invaluable during high-stakes missions.",
            ])),
            ..Default::default()
        },
        Character {
            name: "Nagochi".to_string(),
            img: Some("./igicharacters/nagochi.png".to_string()),
            description: Some(
                "Nagochi is a highly skilled special forces operative and a key member of Captain Harrison’s team. Known for his stealth abilities and combat expertise, he plays a crucial role in reconnaissance and infiltration missions.".to_string(),
            ),
            actor: Some("Unknown".to_string()),
            abilities: Some(vec![
                Ability::new(
                    "Stealth Infiltration",
                    "Nagochi is an expert in silent takedowns and evasion techniques, making him ideal for covert operations.",
                ),
                Ability::new(
                    "Hand-to-Hand Combat",
                    "Trained in close-quarters combat, he can neutralize enemies without raising alarms.",
                ),
                Ability::new(
                    "Advanced Reconnaissance",
                    "Capable of scouting enemy locations and providing valuable intelligence.",
                ),
            ]),
            trivia: Some(lines(&[
                "Nagochi's name suggests an Asian background, possibly linked to elite special forces training.",
                "He is one of the most disciplined and precise members of Harrison’s squad.",
            ])),
            history: Some(lines(&[
                "Nagochi joined Harrison’s team as a stealth specialist for high-risk missions.",
                "He has been instrumental in gathering intel on enemy movements and fortifications.",
            ])),
            ..Default::default()
        },
        Character {
            name: "Skinner".to_string(),
            img: Some("./igicharacters/skinner.png".to_string()),
            description: Some(
                "Skinner is the heavy weapons specialist of Captain Harrison’s team. Known for his brute strength and aggressive combat style, he is deployed in high-risk missions that require overwhelming firepower.".to_string(),
            ),
            actor: Some("Unknown".to_string()),
            abilities: Some(vec![
                Ability::new(
                    "Heavy Weapons Mastery",
                    "Skinner is proficient with machine guns, explosives, and high-caliber weaponry.",
                ),
                Ability::new(
                    "Defensive Tactics",
                    "Provides cover fire and protection for his team during assaults.",
                ),
                Ability::new(
                    "Breach and Clear",
                    "Specializes in breaking through enemy defenses and securing high-threat areas.",
                ),
            ]),
            trivia: Some(lines(&[
                "Skinner is often the first to charge into combat, making him one of the most fearless operatives.",
                "Rumored to have served in multiple high-risk war zones before joining Harrison’s team.",
            ])),
            history: Some(lines(&[
                "Skinner was recruited for his unmatched combat skills and ability to handle high-pressure situations.",
                "He played a key role in multiple direct assaults against enemy strongholds.",
            ])),
            ..Default::default()
        },
        Character {
            name: "Leonard".to_string(),
            img: Some("./igicharacters/leonard.png".to_string()),
            description: Some(
                "Leonard is the communications and tactical support expert of Captain Harrison’s team. He ensures secure communication channels and provides real-time mission updates to the squad.".to_string(),
            ),
            actor: Some("Unknown".to_string()),
            abilities: Some(vec![
                Ability::new(
                    "Electronic Warfare",
                    "Leonard can tap into enemy communications and disrupt security systems.",
                ),
                Ability::new(
                    "Mission Coordination",
                    "Provides battlefield intelligence, tracking enemy movements and securing extraction routes.",
                ),
                Ability::new(
                    "Strategic Planning",
                    "Works closely with Harrison to devise tactical approaches for complex missions.",
                ),
            ]),
            trivia: Some(lines(&[
                "Leonard rarely engages in combat but plays a vital role in mission success.",
                "His quick thinking and ability to adapt to changing scenarios make him an invaluable asset.",
            ])),
            history: Some(lines(&[
                "Leonard was brought onto Harrison’s team due to his expertise in cybersecurity and military communications.",
                "His intelligence gathering has prevented several mission failures by detecting threats in advance.",
            ])),
            ..Default::default()
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_has_nine_characters() {
        assert_eq!(characters().len(), 9);
    }

    #[test]
    fn anya_has_three_abilities_led_by_mission_coordination() {
        let anya = get("Anya").unwrap();
        let abilities = anya.abilities.as_ref().unwrap();
        assert_eq!(abilities.len(), 3);
        assert_eq!(abilities[0].name, "Mission Coordination");
    }

    #[test]
    fn lookup_ignores_case() {
        assert!(get("david jones").is_some());
        assert!(get("EKK").is_some());
        assert!(get("MacReady").is_none());
    }
}
