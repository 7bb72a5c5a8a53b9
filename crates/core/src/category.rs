use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed expense taxonomy. This list is versioned: renaming or removing a
/// variant is a compatibility-breaking change for every consumer of
/// `Bill_Category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BillCategory {
    #[serde(rename = "Team Lunch")]
    TeamLunch,
    #[serde(rename = "Travel - Cab")]
    TravelCab,
    Breakfast,
    Dinner,
    #[serde(rename = "Evening Snacks")]
    EveningSnacks,
    #[serde(rename = "Travel - Auto")]
    TravelAuto,
    #[serde(rename = "Travel - Bus")]
    TravelBus,
    #[serde(rename = "Repairs & Maintenance")]
    RepairsMaintenance,
    Communication,
    #[default]
    General,
    #[serde(rename = "Printing & Stationery")]
    PrintingStationery,
    #[serde(rename = "Staff Welfare")]
    StaffWelfare,
    Fuel,
    Lunch,
    #[serde(rename = "Software License")]
    SoftwareLicense,
    Online,
}

impl BillCategory {
    /// Every category, in the classifier's canonical matching order.
    /// Earlier entries win fuzzy-match ties.
    pub const ALL: [BillCategory; 16] = [
        BillCategory::TeamLunch,
        BillCategory::TravelCab,
        BillCategory::Breakfast,
        BillCategory::Dinner,
        BillCategory::EveningSnacks,
        BillCategory::TravelAuto,
        BillCategory::TravelBus,
        BillCategory::RepairsMaintenance,
        BillCategory::Communication,
        BillCategory::General,
        BillCategory::PrintingStationery,
        BillCategory::StaffWelfare,
        BillCategory::Fuel,
        BillCategory::Lunch,
        BillCategory::SoftwareLicense,
        BillCategory::Online,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BillCategory::TeamLunch => "Team Lunch",
            BillCategory::TravelCab => "Travel - Cab",
            BillCategory::Breakfast => "Breakfast",
            BillCategory::Dinner => "Dinner",
            BillCategory::EveningSnacks => "Evening Snacks",
            BillCategory::TravelAuto => "Travel - Auto",
            BillCategory::TravelBus => "Travel - Bus",
            BillCategory::RepairsMaintenance => "Repairs & Maintenance",
            BillCategory::Communication => "Communication",
            BillCategory::General => "General",
            BillCategory::PrintingStationery => "Printing & Stationery",
            BillCategory::StaffWelfare => "Staff Welfare",
            BillCategory::Fuel => "Fuel",
            BillCategory::Lunch => "Lunch",
            BillCategory::SoftwareLicense => "Software License",
            BillCategory::Online => "Online",
        }
    }
}

impl fmt::Display for BillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BillCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BillCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown bill category: '{s}'"))
    }
}
