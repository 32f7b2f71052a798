//! The fixed catalogue of the 17 goals.
//!
//! Titles are the official goal statements; they double as candidate labels
//! for zero-shot label scoring. Keywords feed the rule-based classifier.

use super::identifier::SdgId;

/// Catalogue entry for one goal
#[derive(Debug, Clone, Copy)]
pub struct GoalInfo {
    pub number: u32,
    pub short_name: &'static str,
    pub title: &'static str,
    pub keywords: &'static [&'static str],
}

const GOALS: [GoalInfo; 17] = [
    GoalInfo {
        number: 1,
        short_name: "No Poverty",
        title: "End poverty in all its forms everywhere",
        keywords: &["poverty", "low-income", "microfinance", "social protection"],
    },
    GoalInfo {
        number: 2,
        short_name: "Zero Hunger",
        title: "End hunger, achieve food security and improved nutrition and promote sustainable agriculture",
        keywords: &["hunger", "food security", "nutrition", "crop", "agricultur", "fertiliz", "irrigation"],
    },
    GoalInfo {
        number: 3,
        short_name: "Good Health and Well-being",
        title: "Ensure healthy lives and promote well-being for all at all ages",
        keywords: &["health", "disease", "medical", "patient", "therapeutic", "vaccine", "diagnos"],
    },
    GoalInfo {
        number: 4,
        short_name: "Quality Education",
        title: "Ensure inclusive and equitable quality education and promote lifelong learning opportunities for all",
        keywords: &["education", "learning", "teaching", "student", "school"],
    },
    GoalInfo {
        number: 5,
        short_name: "Gender Equality",
        title: "Achieve gender equality and empower all women and girls",
        keywords: &["gender", "women", "girls", "maternal"],
    },
    GoalInfo {
        number: 6,
        short_name: "Clean Water and Sanitation",
        title: "Ensure availability and sustainable management of water and sanitation for all",
        keywords: &["drinking water", "sanitation", "wastewater", "water purification", "desalination", "water treatment"],
    },
    GoalInfo {
        number: 7,
        short_name: "Affordable and Clean Energy",
        title: "Ensure access to affordable, reliable, sustainable and modern energy for all",
        keywords: &["renewable energy", "solar", "photovoltaic", "wind turbine", "energy efficiency", "battery", "fuel cell"],
    },
    GoalInfo {
        number: 8,
        short_name: "Decent Work and Economic Growth",
        title: "Promote sustained, inclusive and sustainable economic growth, full and productive employment and decent work for all",
        keywords: &["employment", "workplace safety", "decent work", "labour", "productivity"],
    },
    GoalInfo {
        number: 9,
        short_name: "Industry, Innovation and Infrastructure",
        title: "Build resilient infrastructure, promote inclusive and sustainable industrialization and foster innovation",
        keywords: &["infrastructure", "industrial", "manufacturing", "telecommunication", "broadband"],
    },
    GoalInfo {
        number: 10,
        short_name: "Reduced Inequalities",
        title: "Reduce inequality within and among countries",
        keywords: &["inequality", "accessibility", "disabilit", "inclusion", "migrant"],
    },
    GoalInfo {
        number: 11,
        short_name: "Sustainable Cities and Communities",
        title: "Make cities and human settlements inclusive, safe, resilient and sustainable",
        keywords: &["urban", "city", "cities", "public transport", "housing", "air quality"],
    },
    GoalInfo {
        number: 12,
        short_name: "Responsible Consumption and Production",
        title: "Ensure sustainable consumption and production patterns",
        keywords: &["recycl", "waste reduction", "circular economy", "biodegradable", "reuse", "packaging"],
    },
    GoalInfo {
        number: 13,
        short_name: "Climate Action",
        title: "Take urgent action to combat climate change and its impacts",
        keywords: &["climate", "greenhouse", "carbon dioxide", "co2", "carbon capture", "emission"],
    },
    GoalInfo {
        number: 14,
        short_name: "Life Below Water",
        title: "Conserve and sustainably use the oceans, seas and marine resources for sustainable development",
        keywords: &["ocean", "marine", "fishing", "aquaculture", "coral", "seawater"],
    },
    GoalInfo {
        number: 15,
        short_name: "Life on Land",
        title: "Protect, restore and promote sustainable use of terrestrial ecosystems, sustainably manage forests, combat desertification, and halt and reverse land degradation and halt biodiversity loss",
        keywords: &["forest", "biodiversity", "desertification", "soil degradation", "wildlife", "ecosystem"],
    },
    GoalInfo {
        number: 16,
        short_name: "Peace, Justice and Strong Institutions",
        title: "Promote peaceful and inclusive societies for sustainable development, provide access to justice for all and build effective, accountable and inclusive institutions at all levels",
        keywords: &["justice", "corruption", "violence", "identity verification", "transparency"],
    },
    GoalInfo {
        number: 17,
        short_name: "Partnerships for the Goals",
        title: "Strengthen the means of implementation and revitalize the Global Partnership for Sustainable Development",
        keywords: &["partnership", "technology transfer", "capacity building", "cooperation"],
    },
];

/// Catalogue entry for a goal.
pub fn goal_info(goal: SdgId) -> &'static GoalInfo {
    &GOALS[(goal.number() - 1) as usize]
}

/// All catalogue entries, ordered by goal number.
pub fn all_goals() -> &'static [GoalInfo] {
    &GOALS
}

/// Reverse lookup of a goal from its full title.
pub fn goal_from_title(title: &str) -> Option<SdgId> {
    GOALS
        .iter()
        .find(|g| g.title == title)
        .and_then(|g| SdgId::from_number(g.number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_is_ordered() {
        for (i, goal) in all_goals().iter().enumerate() {
            assert_eq!(goal.number as usize, i + 1);
        }
    }

    #[test]
    fn test_goal_info_lookup() {
        let seven = SdgId::from_number(7).unwrap();
        assert_eq!(goal_info(seven).short_name, "Affordable and Clean Energy");
    }

    #[test]
    fn test_title_roundtrip() {
        for goal in SdgId::all() {
            assert_eq!(goal_from_title(goal_info(goal).title), Some(goal));
        }
        assert_eq!(goal_from_title("Not a goal"), None);
    }
}
