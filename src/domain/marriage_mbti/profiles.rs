//! The sixteen MBTI codes and their static content.
//!
//! The closed enum makes an unmapped code unrepresentable, so the lookup
//! needs no placeholder fallback.

use serde::Serialize;

/// A four-letter MBTI code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MbtiType {
    Intj,
    Intp,
    Entj,
    Entp,
    Infj,
    Infp,
    Enfj,
    Enfp,
    Istj,
    Isfj,
    Estj,
    Esfj,
    Istp,
    Isfp,
    Estp,
    Esfp,
}

/// One compatible-type entry: the match and a one-sentence reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Compatibility {
    #[serde(rename = "type")]
    pub mbti: &'static str,
    pub reason: &'static str,
}

/// Static content attached to an MBTI code.
#[derive(Debug, Clone, Copy)]
pub struct MbtiTypeProfile {
    pub name: &'static str,
    pub description: &'static str,
    pub love_characteristics: &'static [&'static str],
    pub compatible_types: &'static [Compatibility],
}

impl MbtiType {
    /// All sixteen codes in canonical order.
    pub const ALL: [MbtiType; 16] = [
        MbtiType::Intj,
        MbtiType::Intp,
        MbtiType::Entj,
        MbtiType::Entp,
        MbtiType::Infj,
        MbtiType::Infp,
        MbtiType::Enfj,
        MbtiType::Enfp,
        MbtiType::Istj,
        MbtiType::Isfj,
        MbtiType::Estj,
        MbtiType::Esfj,
        MbtiType::Istp,
        MbtiType::Isfp,
        MbtiType::Estp,
        MbtiType::Esfp,
    ];

    /// Returns the four-letter code string.
    pub fn code(&self) -> &'static str {
        match self {
            MbtiType::Intj => "INTJ",
            MbtiType::Intp => "INTP",
            MbtiType::Entj => "ENTJ",
            MbtiType::Entp => "ENTP",
            MbtiType::Infj => "INFJ",
            MbtiType::Infp => "INFP",
            MbtiType::Enfj => "ENFJ",
            MbtiType::Enfp => "ENFP",
            MbtiType::Istj => "ISTJ",
            MbtiType::Isfj => "ISFJ",
            MbtiType::Estj => "ESTJ",
            MbtiType::Esfj => "ESFJ",
            MbtiType::Istp => "ISTP",
            MbtiType::Isfp => "ISFP",
            MbtiType::Estp => "ESTP",
            MbtiType::Esfp => "ESFP",
        }
    }

    /// Builds a code from the four resolved axis letters.
    ///
    /// Callers pass letters already constrained to their axis, so every
    /// combination maps to a variant.
    pub fn from_letters(ei: char, sn: char, tf: char, jp: char) -> Self {
        match (ei, sn, tf, jp) {
            ('I', 'N', 'T', 'J') => MbtiType::Intj,
            ('I', 'N', 'T', 'P') => MbtiType::Intp,
            ('E', 'N', 'T', 'J') => MbtiType::Entj,
            ('E', 'N', 'T', 'P') => MbtiType::Entp,
            ('I', 'N', 'F', 'J') => MbtiType::Infj,
            ('I', 'N', 'F', 'P') => MbtiType::Infp,
            ('E', 'N', 'F', 'J') => MbtiType::Enfj,
            ('E', 'N', 'F', 'P') => MbtiType::Enfp,
            ('I', 'S', 'T', 'J') => MbtiType::Istj,
            ('I', 'S', 'F', 'J') => MbtiType::Isfj,
            ('E', 'S', 'T', 'J') => MbtiType::Estj,
            ('E', 'S', 'F', 'J') => MbtiType::Esfj,
            ('I', 'S', 'T', 'P') => MbtiType::Istp,
            ('I', 'S', 'F', 'P') => MbtiType::Isfp,
            ('E', 'S', 'T', 'P') => MbtiType::Estp,
            ('E', 'S', 'F', 'P') => MbtiType::Esfp,
            _ => unreachable!("axis letters are constrained per axis"),
        }
    }

    /// Returns the static content record for this code.
    pub fn profile(&self) -> MbtiTypeProfile {
        match self {
            MbtiType::Intj => MbtiTypeProfile {
                name: "Architect",
                description: "Independent and idealistic, building the relationship around a long-term vision",
                love_characteristics: &[
                    "Seeks deep, meaningful relationships",
                    "Values a partner's intellect and independence",
                    "Develops the relationship through long-term plans",
                    "Reserved in expressing emotion, but loves deeply",
                ],
                compatible_types: &[
                    Compatibility {
                        mbti: "ENFP (Campaigner)",
                        reason: "You spark each other's creativity and ideals",
                    },
                    Compatibility {
                        mbti: "ENTP (Debater)",
                        reason: "You trade intellectual stimulation and fresh perspectives",
                    },
                    Compatibility {
                        mbti: "INFJ (Advocate)",
                        reason: "Deep mutual understanding and shared values",
                    },
                ],
            },
            MbtiType::Intp => MbtiTypeProfile {
                name: "Logician",
                description: "An intellectually curious thinker who seeks deep understanding with a partner",
                love_characteristics: &[
                    "Values intellectual stimulation",
                    "Treasures independence and freedom",
                    "Prioritizes logical understanding over emotion",
                    "Thinks things through carefully before acting",
                ],
                compatible_types: &[
                    Compatibility {
                        mbti: "ENFJ (Protagonist)",
                        reason: "Emotional support and opportunities to grow",
                    },
                    Compatibility {
                        mbti: "ENTJ (Commander)",
                        reason: "Shared goals and intellectual debate",
                    },
                    Compatibility {
                        mbti: "INFP (Mediator)",
                        reason: "Shared creativity and deep understanding",
                    },
                ],
            },
            MbtiType::Entj => MbtiTypeProfile {
                name: "Commander",
                description: "A natural leader who values achieving goals together with a partner",
                love_characteristics: &[
                    "Takes the lead in the relationship too",
                    "Focuses on achieving shared goals",
                    "Prefers an efficient, constructive partnership",
                    "Supports a partner's growth",
                ],
                compatible_types: &[
                    Compatibility {
                        mbti: "INFP (Mediator)",
                        reason: "Emotional depth and balance",
                    },
                    Compatibility {
                        mbti: "INTP (Logician)",
                        reason: "Intellectual stimulation and complementary strengths",
                    },
                    Compatibility {
                        mbti: "ENFP (Campaigner)",
                        reason: "Shared energy and creativity",
                    },
                ],
            },
            MbtiType::Entp => MbtiTypeProfile {
                name: "Debater",
                description: "A creative, sociable innovator who enjoys intellectual exchange with a partner",
                love_characteristics: &[
                    "Enjoys intellectual debate and new ideas",
                    "Seeks change and stimulation",
                    "Draws out a partner's potential",
                    "Prefers a free, open relationship",
                ],
                compatible_types: &[
                    Compatibility {
                        mbti: "INFJ (Advocate)",
                        reason: "Deep insight and shared ideals",
                    },
                    Compatibility {
                        mbti: "INTJ (Architect)",
                        reason: "Long-term vision and strategic thinking",
                    },
                    Compatibility {
                        mbti: "ENFJ (Protagonist)",
                        reason: "Strong people skills and communication",
                    },
                ],
            },
            MbtiType::Infj => MbtiTypeProfile {
                name: "Advocate",
                description: "An idealist with deep insight who pursues the ideal relationship",
                love_characteristics: &[
                    "Seeks a deep spiritual connection",
                    "Wants to understand a partner's inner world",
                    "Holds a clear picture of the ideal relationship",
                    "Devoted and considerate",
                ],
                compatible_types: &[
                    Compatibility {
                        mbti: "ENTP (Debater)",
                        reason: "Creative energy and fresh perspectives",
                    },
                    Compatibility {
                        mbti: "ENFP (Campaigner)",
                        reason: "Emotional understanding and empathy",
                    },
                    Compatibility {
                        mbti: "INTJ (Architect)",
                        reason: "Deep understanding and a long-term vision",
                    },
                ],
            },
            MbtiType::Infp => MbtiTypeProfile {
                name: "Mediator",
                description: "A passionate idealist who treasures values and seeks a true kindred spirit",
                love_characteristics: &[
                    "Values alignment of core beliefs",
                    "Seeks genuine understanding and acceptance",
                    "A creative, passionate relationship",
                    "Respects individuality and independence",
                ],
                compatible_types: &[
                    Compatibility {
                        mbti: "ENFJ (Protagonist)",
                        reason: "Deep emotional support",
                    },
                    Compatibility {
                        mbti: "ENTJ (Commander)",
                        reason: "Goal achievement and chances to grow",
                    },
                    Compatibility {
                        mbti: "INTP (Logician)",
                        reason: "Shared curiosity and creativity",
                    },
                ],
            },
            MbtiType::Enfj => MbtiTypeProfile {
                name: "Protagonist",
                description: "A charismatic leader who nurtures others and builds harmonious relationships",
                love_characteristics: &[
                    "Supports a partner's growth",
                    "Values harmony and communication",
                    "Treasures the emotional bond",
                    "Pours passion and devotion into the relationship",
                ],
                compatible_types: &[
                    Compatibility {
                        mbti: "INFP (Mediator)",
                        reason: "Deep connection through values and feelings",
                    },
                    Compatibility {
                        mbti: "ISFP (Adventurer)",
                        reason: "Shared sensitivity and artistic sense",
                    },
                    Compatibility {
                        mbti: "INTP (Logician)",
                        reason: "Intellectual stimulation and opportunities to grow",
                    },
                ],
            },
            MbtiType::Enfp => MbtiTypeProfile {
                name: "Campaigner",
                description: "An enthusiastic, creative free spirit exploring possibilities with a partner",
                love_characteristics: &[
                    "A passionate, creative relationship",
                    "Shares new experiences and adventures",
                    "Believes in a partner's potential",
                    "Values freedom and growth",
                ],
                compatible_types: &[
                    Compatibility {
                        mbti: "INTJ (Architect)",
                        reason: "Deep vision and strategic thinking",
                    },
                    Compatibility {
                        mbti: "INFJ (Advocate)",
                        reason: "Spiritual connection and shared ideals",
                    },
                    Compatibility {
                        mbti: "ENTJ (Commander)",
                        reason: "Goal achievement and mutual growth",
                    },
                ],
            },
            MbtiType::Istj => MbtiTypeProfile {
                name: "Logistician",
                description: "A responsible pragmatist who builds stable, trustworthy relationships",
                love_characteristics: &[
                    "Provides stability and reliability",
                    "Values traditional commitments",
                    "Responsible and devoted",
                    "Takes a practical, down-to-earth approach",
                ],
                compatible_types: &[
                    Compatibility {
                        mbti: "ESFP (Entertainer)",
                        reason: "Balances fun and spontaneity",
                    },
                    Compatibility {
                        mbti: "ESTP (Entrepreneur)",
                        reason: "Active energy and new experiences",
                    },
                    Compatibility {
                        mbti: "ISFP (Adventurer)",
                        reason: "Shared sensitivity and artistic sense",
                    },
                ],
            },
            MbtiType::Isfj => MbtiTypeProfile {
                name: "Defender",
                description: "A warm protector who finds joy in meeting a partner's needs",
                love_characteristics: &[
                    "Puts a partner's happiness first",
                    "Devoted and considerate",
                    "A stable, harmonious relationship",
                    "Attentive care and support",
                ],
                compatible_types: &[
                    Compatibility {
                        mbti: "ESTP (Entrepreneur)",
                        reason: "Active energy and balance",
                    },
                    Compatibility {
                        mbti: "ESFP (Entertainer)",
                        reason: "Shared fun and warmth",
                    },
                    Compatibility {
                        mbti: "ISFP (Adventurer)",
                        reason: "Shared sensitivity and values",
                    },
                ],
            },
            MbtiType::Estj => MbtiTypeProfile {
                name: "Executive",
                description: "An organized, capable leader who builds an efficient, stable relationship",
                love_characteristics: &[
                    "Provides responsibility and stability",
                    "An efficient, well-planned relationship",
                    "A strong sense of duty to family and the future",
                    "Practical, down-to-earth support",
                ],
                compatible_types: &[
                    Compatibility {
                        mbti: "ISFP (Adventurer)",
                        reason: "Balances sensitivity and creativity",
                    },
                    Compatibility {
                        mbti: "INFP (Mediator)",
                        reason: "Depth of values and feeling",
                    },
                    Compatibility {
                        mbti: "ISTP (Virtuoso)",
                        reason: "Practicality and respect for independence",
                    },
                ],
            },
            MbtiType::Esfj => MbtiTypeProfile {
                name: "Consul",
                description: "A sociable, caring collaborator who builds harmonious relationships",
                love_characteristics: &[
                    "Values harmony and communication",
                    "Attuned to a partner's needs",
                    "Sociable and family-minded",
                    "Provides emotional support",
                ],
                compatible_types: &[
                    Compatibility {
                        mbti: "ISFP (Adventurer)",
                        reason: "Shared artistry and sensitivity",
                    },
                    Compatibility {
                        mbti: "ISTP (Virtuoso)",
                        reason: "Balance of practicality and independence",
                    },
                    Compatibility {
                        mbti: "INFP (Mediator)",
                        reason: "Shared values and creativity",
                    },
                ],
            },
            MbtiType::Istp => MbtiTypeProfile {
                name: "Virtuoso",
                description: "An independent realist who prefers a practical, flexible relationship",
                love_characteristics: &[
                    "Values independence and freedom",
                    "Takes a practical, down-to-earth approach",
                    "Shows love through actions",
                    "Judges calmly and objectively",
                ],
                compatible_types: &[
                    Compatibility {
                        mbti: "ESFJ (Consul)",
                        reason: "Emotional support and sociability",
                    },
                    Compatibility {
                        mbti: "ESTJ (Executive)",
                        reason: "Shared efficiency and goals",
                    },
                    Compatibility {
                        mbti: "ISFJ (Defender)",
                        reason: "Consideration and stability",
                    },
                ],
            },
            MbtiType::Isfp => MbtiTypeProfile {
                name: "Adventurer",
                description: "An artistic soul with rich sensitivity seeking true understanding and beauty",
                love_characteristics: &[
                    "Sensitivity and artistic sense",
                    "Deeply shared values",
                    "Respects individuality and independence",
                    "Shares aesthetic experiences and emotions",
                ],
                compatible_types: &[
                    Compatibility {
                        mbti: "ENFJ (Protagonist)",
                        reason: "Emotional understanding and support",
                    },
                    Compatibility {
                        mbti: "ESFJ (Consul)",
                        reason: "Shared harmony and consideration",
                    },
                    Compatibility {
                        mbti: "ESTJ (Executive)",
                        reason: "Balance of stability and responsibility",
                    },
                ],
            },
            MbtiType::Estp => MbtiTypeProfile {
                name: "Entrepreneur",
                description: "An active realist who builds a fun, stimulating relationship",
                love_characteristics: &[
                    "An active, fun relationship",
                    "Focuses on enjoying the present",
                    "Flexible and adaptable",
                    "Energetic and sociable",
                ],
                compatible_types: &[
                    Compatibility {
                        mbti: "ISFJ (Defender)",
                        reason: "Balance of stability and consideration",
                    },
                    Compatibility {
                        mbti: "ISTJ (Logistician)",
                        reason: "Shared responsibility and practicality",
                    },
                    Compatibility {
                        mbti: "INFJ (Advocate)",
                        reason: "Deep understanding and a long-term view",
                    },
                ],
            },
            MbtiType::Esfp => MbtiTypeProfile {
                name: "Entertainer",
                description: "A fun-loving, warm free spirit seeking a partner to enjoy life with",
                love_characteristics: &[
                    "Shares fun and joy",
                    "Warm and considerate",
                    "Spontaneous and flexible",
                    "Treasures connections with people",
                ],
                compatible_types: &[
                    Compatibility {
                        mbti: "ISTJ (Logistician)",
                        reason: "Balance of stability and responsibility",
                    },
                    Compatibility {
                        mbti: "ISFJ (Defender)",
                        reason: "Shared consideration and harmony",
                    },
                    Compatibility {
                        mbti: "INTJ (Architect)",
                        reason: "Deep vision and strategic thinking",
                    },
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sixteen_distinct_codes() {
        let codes: HashSet<&str> = MbtiType::ALL.iter().map(|t| t.code()).collect();
        assert_eq!(codes.len(), 16);
        for code in &codes {
            assert_eq!(code.len(), 4);
        }
    }

    #[test]
    fn from_letters_round_trips_every_code() {
        for t in MbtiType::ALL {
            let code = t.code();
            let mut chars = code.chars();
            let rebuilt = MbtiType::from_letters(
                chars.next().unwrap(),
                chars.next().unwrap(),
                chars.next().unwrap(),
                chars.next().unwrap(),
            );
            assert_eq!(rebuilt, t);
        }
    }

    #[test]
    fn every_profile_is_complete() {
        for t in MbtiType::ALL {
            let profile = t.profile();
            assert!(!profile.name.is_empty(), "{}", t.code());
            assert!(!profile.description.is_empty(), "{}", t.code());
            assert!(
                (3..=4).contains(&profile.love_characteristics.len()),
                "{}",
                t.code()
            );
            assert_eq!(profile.compatible_types.len(), 3, "{}", t.code());
        }
    }

    #[test]
    fn compatible_entries_name_real_codes() {
        let codes: HashSet<&str> = MbtiType::ALL.iter().map(|t| t.code()).collect();
        for t in MbtiType::ALL {
            for compat in t.profile().compatible_types {
                let code = compat.mbti.split_whitespace().next().unwrap();
                assert!(codes.contains(code), "{} lists {}", t.code(), compat.mbti);
                assert!(!compat.reason.is_empty());
            }
        }
    }
}
