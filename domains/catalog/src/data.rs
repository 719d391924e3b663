//! Static site content: company details, headline statistics, and the
//! project listings the catalog is seeded from.

use ammaar_common::Result;

use crate::domain::entities::{ListingStatus, Project, ProjectType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetails {
    pub phone: &'static str,
    /// International format, digits only (used by `wa.me` links)
    pub whatsapp: &'static str,
    pub email: &'static str,
    pub address: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLinks {
    pub facebook: &'static str,
    pub instagram: &'static str,
    pub linkedin: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanyInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub established: u16,
    pub description: &'static str,
    pub contact: ContactDetails,
    pub socials: SocialLinks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub years_experience: u32,
    pub projects_completed: u32,
    pub happy_families: u32,
    pub acres_developed: u32,
    pub awards: u32,
    pub ongoing_projects: u32,
}

pub const COMPANY_INFO: CompanyInfo = CompanyInfo {
    name: "Ammaar Constructions",
    tagline: "Projects Develop & Promoted",
    established: 2009,
    description: "From premium villas to fertile farm lands, Ammaar Constructions \
                  has been building trusted communities across Hyderabad and its \
                  surrounding districts since 2009.",
    contact: ContactDetails {
        phone: "+91 98765 43210",
        whatsapp: "919876543210",
        email: "info@ammaarconstructions.com",
        address: "Road No. 12, Banjara Hills, Hyderabad, Telangana 500034",
    },
    socials: SocialLinks {
        facebook: "https://facebook.com/ammaarconstructions",
        instagram: "https://instagram.com/ammaarconstructions",
        linkedin: "https://linkedin.com/company/ammaarconstructions",
    },
};

pub const STATISTICS: Statistics = Statistics {
    years_experience: 15,
    projects_completed: 50,
    happy_families: 1200,
    acres_developed: 500,
    awards: 12,
    ongoing_projects: 8,
};

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{}?q=80&w=2070", photo)
}

/// Listings in display order. The head of this list feeds the hero
/// slides and the featured section.
pub fn seed_projects() -> Result<Vec<Project>> {
    Ok(vec![
        Project::new(
            "royal-palms-villas",
            "Royal Palms Villas",
            ProjectType::Residential,
            ListingStatus::SellingFast,
            vec![
                unsplash("photo-1613490493576-7fde63acd811"),
                unsplash("photo-1600596542815-ffad4c1539a9"),
                unsplash("photo-1600607687939-ce8a6c25118c"),
            ],
        )?
        .with_location("Kokapet, Hyderabad")
        .with_price("₹2.5 Cr onwards")
        .with_surface("4,500 sq.ft")
        .with_description(
            "Gated community of 4 BHK villas with private gardens, a clubhouse, \
             and direct access to the Outer Ring Road.",
        )
        .with_rooms(4, 5)
        .with_year_built(2024)
        .with_features([
            "Private Garden",
            "Clubhouse",
            "24/7 Security",
            "Swimming Pool",
            "Power Backup",
            "Children's Play Area",
        ]),
        Project::new(
            "green-acres-farmland",
            "Green Acres Farm Lands",
            ProjectType::Farmland,
            ListingStatus::NewLaunch,
            vec![
                unsplash("photo-1500382017468-9049fed747ef"),
                unsplash("photo-1464226184884-fa280b87c399"),
            ],
        )?
        .with_location("Shadnagar, Rangareddy")
        .with_price("₹25 Lakhs per acre")
        .with_surface("1 - 5 Acres")
        .with_description(
            "HMDA-adjacent agricultural plots with drip irrigation, borewells, \
             and mango plantation managed on your behalf.",
        )
        .with_features([
            "Drip Irrigation",
            "Borewell",
            "Mango Plantation",
            "Clear Title",
        ]),
        Project::new(
            "skyline-residency",
            "Skyline Residency",
            ProjectType::Residential,
            ListingStatus::ReadyToMove,
            vec![
                unsplash("photo-1545324418-cc1a3fa10c00"),
                unsplash("photo-1502672260266-1c1ef2d93688"),
                unsplash("photo-1560448204-e02f11c3d0e2"),
                unsplash("photo-1484154218962-a197022b5858"),
            ],
        )?
        .with_location("Gachibowli, Hyderabad")
        .with_price("₹95 Lakhs onwards")
        .with_surface("1,850 sq.ft")
        .with_description(
            "Premium 3 BHK apartments minutes from the financial district, with \
             a rooftop garden and a fully equipped gym.",
        )
        .with_rooms(3, 3)
        .with_year_built(2023)
        .with_features(["Rooftop Garden", "Gym", "Covered Parking", "Lift"]),
        Project::new(
            "sunrise-orchards",
            "Sunrise Orchards",
            ProjectType::Farmland,
            ListingStatus::SellingFast,
            vec![unsplash("photo-1523348837708-15d4a09cfac2")],
        )?
        .with_location("Chevella, Rangareddy")
        .with_price("₹18 Lakhs per acre")
        .with_surface("0.5 - 2 Acres")
        .with_description(
            "Managed orchard plots on the Chevella highway with fencing, \
             internal roads, and a caretaker's lodge.",
        )
        .with_features(["Fenced", "Internal Roads", "Caretaker"]),
        Project::new(
            "lakeview-enclave",
            "Lakeview Enclave",
            ProjectType::Residential,
            ListingStatus::UnderDevelopment,
            vec![
                unsplash("photo-1600585154340-be6161a56a0c"),
                unsplash("photo-1600566753190-17f0baa2a6c3"),
            ],
        )?
        .with_location("Shamshabad, Hyderabad")
        .with_price("₹1.2 Cr onwards")
        .with_surface("2,400 sq.ft")
        .with_description(
            "Independent duplex homes overlooking Himayat Sagar, ten minutes \
             from the airport.",
        )
        .with_rooms(3, 4)
        .with_features(["Lake View", "Duplex", "Solar Water Heating"]),
        Project::new(
            "heritage-county",
            "Heritage County",
            ProjectType::Residential,
            ListingStatus::ReadyToMove,
            vec![
                unsplash("photo-1568605114967-8130f3a36994"),
                unsplash("photo-1570129477492-45c003edd2be"),
            ],
        )?
        .with_location("Tellapur, Hyderabad")
        .with_price("₹1.6 Cr onwards")
        .with_surface("3,200 sq.ft")
        .with_description(
            "Courtyard villas with heritage-inspired facades in an established \
             community with schools and hospitals nearby.",
        )
        .with_rooms(4, 4)
        .with_year_built(2021)
        .with_features(["Courtyard", "Clubhouse", "Jogging Track"]),
        Project::new(
            "riverbend-farms",
            "Riverbend Farms",
            ProjectType::Farmland,
            ListingStatus::NewLaunch,
            vec![
                unsplash("photo-1625246333195-78d9c38ad449"),
                unsplash("photo-1560493676-04071c5f467b"),
            ],
        )?
        .with_location("Sadashivpet, Sangareddy")
        .with_price("₹12 Lakhs per acre")
        .with_surface("1 - 10 Acres")
        .with_description(
            "River-fed farm lands on the Mumbai highway corridor with \
             red soil suited to horticulture.",
        )
        .with_features(["River Access", "Red Soil", "Highway Frontage"]),
    ])
}
