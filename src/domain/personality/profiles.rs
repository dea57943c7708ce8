//! Partner archetypes with their static descriptive content.

use serde::Serialize;

/// The six partner archetypes the assessment can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PersonalityType {
    Communicator,
    Supporter,
    Leader,
    Analyst,
    Creative,
    Reliable,
}

/// Static description bundle attached to an archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeProfile {
    pub title: &'static str,
    pub summary: &'static str,
    pub strengths: &'static str,
    pub marriage_advice: &'static str,
    pub growth_points: &'static str,
}

impl PersonalityType {
    /// All archetypes in canonical order.
    pub const ALL: [PersonalityType; 6] = [
        PersonalityType::Communicator,
        PersonalityType::Supporter,
        PersonalityType::Leader,
        PersonalityType::Analyst,
        PersonalityType::Creative,
        PersonalityType::Reliable,
    ];

    /// Returns the display label used on the wire.
    pub fn label(&self) -> &'static str {
        match self {
            PersonalityType::Communicator => "Communicator",
            PersonalityType::Supporter => "Supporter",
            PersonalityType::Leader => "Leader",
            PersonalityType::Analyst => "Analyst",
            PersonalityType::Creative => "Creative",
            PersonalityType::Reliable => "Reliable Partner",
        }
    }

    /// Returns the static description bundle for this archetype.
    pub fn profile(&self) -> TypeProfile {
        match self {
            PersonalityType::Communicator => TypeProfile {
                title: "Communicator",
                summary: "You are an engaging partner with natural conversational skill and a cooperative spirit.",
                strengths: "- Listens closely and empathizes readily\n- Bright, positive presence that puts people at ease\n- Values teamwork and keeps the peace",
                marriage_advice: "Prioritizing dialogue and mutual understanding with your partner will let you build a deep bond. Your communication skills will keep a marriage on good footing.",
                growth_points: "Make sure to state your own opinions clearly at times; healthy debate matters too.",
            },
            PersonalityType::Supporter => TypeProfile {
                title: "Supporter",
                summary: "You are considerate and bring a warm, supportive heart to a partnership.",
                strengths: "- Stays close to a partner's feelings and supports them\n- Builds stable relationships\n- Sincere and trustworthy character",
                marriage_advice: "Your kindness and steadiness are major strengths in a long-term relationship. Keep supporting your partner while also voicing your own feelings to build an even better partnership.",
                growth_points: "Express your own opinions and emotions more actively and aim for an equal relationship.",
            },
            PersonalityType::Leader => TypeProfile {
                title: "Leader",
                summary: "You are decisive and have the strength to lead a relationship forward.",
                strengths: "- Plans ahead and acts with the future in mind\n- Strong sense of responsibility, a dependable presence\n- Tackles problems head-on",
                marriage_advice: "Use your leadership to support the household while respecting your partner's views; deciding things together is what counts.",
                growth_points: "Stay closer to your partner's feelings and cultivate the habit of deciding things as a pair.",
            },
            PersonalityType::Analyst => TypeProfile {
                title: "Analyst",
                summary: "You are a dependable partner with calm, logical judgment.",
                strengths: "- Analyzes situations objectively and judges accurately\n- Keeps relationships steady without being swayed by emotion\n- Plans methodically with the future in view",
                marriage_advice: "Your logical mind supports constructive discussions with your partner. Caring for the emotional side of communication as well will deepen the bond.",
                growth_points: "Enrich your emotional expression and practice attending to your partner's feelings.",
            },
            PersonalityType::Creative => TypeProfile {
                title: "Creative",
                summary: "You are a stimulating partner with creativity and flexibility.",
                strengths: "- Enjoys new ideas and experiences\n- Imaginative enough to keep a partner entertained\n- Adapts flexibly to change",
                marriage_advice: "Your creativity and flexibility bring freshness to a relationship. Valuing stability alongside them will let you grow together in balance.",
                growth_points: "Keep your creative streak while building continuity and stability into the relationship.",
            },
            PersonalityType::Reliable => TypeProfile {
                title: "Reliable Partner",
                summary: "You are a dependable partner with stability and a strong sense of duty.",
                strengths: "- Keeps promises and earns trust\n- Maintains steady relationships\n- Sincere and devoted in love",
                marriage_advice: "Your reliability and sense of responsibility form the foundation of a lasting relationship. Keep that stability, but try new things now and then to bring fresh energy into the partnership.",
                growth_points: "Hold on to your steadiness while developing a bit more initiative and expressiveness.",
            },
        }
    }

    /// Returns the fixed three-entry compatibility list for this archetype.
    ///
    /// The table is intentionally not reciprocal; it mirrors the published
    /// matchmaking guidance rather than a symmetric relation.
    pub fn compatible_types(&self) -> [PersonalityType; 3] {
        use PersonalityType::*;

        match self {
            Communicator => [Supporter, Analyst, Reliable],
            Supporter => [Communicator, Leader, Creative],
            Leader => [Supporter, Analyst, Reliable],
            Analyst => [Communicator, Leader, Creative],
            Creative => [Supporter, Analyst, Reliable],
            Reliable => [Communicator, Leader, Creative],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_has_a_complete_profile() {
        for pt in PersonalityType::ALL {
            let profile = pt.profile();
            assert!(!profile.title.is_empty());
            assert!(!profile.summary.is_empty());
            assert!(!profile.strengths.is_empty());
            assert!(!profile.marriage_advice.is_empty());
            assert!(!profile.growth_points.is_empty());
        }
    }

    #[test]
    fn every_type_lists_three_distinct_compatible_types() {
        for pt in PersonalityType::ALL {
            let compat = pt.compatible_types();
            assert_eq!(compat.len(), 3);
            assert!(!compat.contains(&pt), "{:?} lists itself", pt);
            assert_ne!(compat[0], compat[1]);
            assert_ne!(compat[1], compat[2]);
            assert_ne!(compat[0], compat[2]);
        }
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(PersonalityType::Communicator.label(), "Communicator");
        assert_eq!(PersonalityType::Reliable.label(), "Reliable Partner");
    }
}
