//! About page: company profile and headline statistics

use ammaar_catalog::{CompanyInfo, QuickStat, Statistics, COMPANY_INFO, STATISTICS};

use crate::links::ContactLinks;

pub struct AboutPage {
    company: CompanyInfo,
    statistics: Statistics,
    links: ContactLinks,
}

impl AboutPage {
    pub fn new(links: ContactLinks) -> Self {
        Self {
            company: COMPANY_INFO,
            statistics: STATISTICS,
            links,
        }
    }

    pub fn company(&self) -> &CompanyInfo {
        &self.company
    }

    /// Stat tiles in display order; counters that keep growing get a `+`
    pub fn stats(&self) -> Vec<QuickStat> {
        let s = &self.statistics;
        vec![
            QuickStat {
                label: "Years Experience",
                value: format!("{}+", s.years_experience),
            },
            QuickStat {
                label: "Projects Completed",
                value: format!("{}+", s.projects_completed),
            },
            QuickStat {
                label: "Happy Families",
                value: format!("{}+", s.happy_families),
            },
            QuickStat {
                label: "Acres Developed",
                value: format!("{}+", s.acres_developed),
            },
            QuickStat {
                label: "Awards Won",
                value: s.awards.to_string(),
            },
            QuickStat {
                label: "Ongoing Projects",
                value: s.ongoing_projects.to_string(),
            },
        ]
    }

    pub fn whatsapp_link(&self) -> String {
        self.links.general_enquiry()
    }
}
