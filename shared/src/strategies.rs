//! Built-in government guideline records per disaster type
//!
//! These are always returned first; fetched guideline documents are appended
//! after them by the backend.

use chrono::NaiveDate;

use crate::models::{DisasterType, StrategyPhase, StrategyRecord, GUIDELINE_KIND};

use StrategyPhase::*;

struct StaticStrategy {
    title: &'static str,
    body: &'static str,
    phase: StrategyPhase,
    authority: &'static str,
}

const fn s(
    title: &'static str,
    body: &'static str,
    phase: StrategyPhase,
    authority: &'static str,
) -> StaticStrategy {
    StaticStrategy {
        title,
        body,
        phase,
        authority,
    }
}

const NDMA: &str = "National Disaster Management Authority (NDMA)";
const SDMA: &str = "State Disaster Management Authorities";
const MHA: &str = "Ministry of Home Affairs";
const BIS: &str = "Bureau of Indian Standards (BIS)";
const MOEFCC: &str = "Ministry of Environment, Forest and Climate Change";
const MOHUA: &str = "Ministry of Housing and Urban Affairs";
const MOHFW: &str = "Ministry of Health and Family Welfare";
const IMD: &str = "India Meteorological Department (IMD)";

const FLOOD: &[StaticStrategy] = &[
    s(
        "National Flood Response Protocol",
        "The National Disaster Management Authority (NDMA) recommends immediate evacuation of low-lying areas, deployment of NDRF teams, and establishment of relief camps with essential supplies. State governments should activate District Disaster Management Authorities (DDMAs) to coordinate local response.",
        Response,
        NDMA,
    ),
    s(
        "Flood Early Warning System Protocol",
        "The Central Water Commission (CWC) provides flood forecasting services. State governments should monitor water levels, issue timely warnings through multiple channels, and prepare for evacuations in vulnerable areas.",
        Preparedness,
        "Central Water Commission (CWC)",
    ),
    s(
        "Post-Flood Recovery Guidelines",
        "After floodwaters recede, authorities should conduct damage assessment, provide compensation to affected families, restore infrastructure, and implement disease prevention measures to prevent waterborne illnesses.",
        Recovery,
        MHA,
    ),
    s(
        "Flood Mitigation Framework",
        "Long-term flood mitigation includes construction of embankments and levees, improvement of drainage systems, watershed management, and implementation of flood plain zoning regulations to prevent encroachment.",
        Mitigation,
        NDMA,
    ),
];

const CYCLONE: &[StaticStrategy] = &[
    s(
        "National Cyclone Risk Mitigation Project",
        "This project aims to reduce vulnerability of coastal communities to cyclones through early warning systems, evacuation shelters, and coastal embankments. States should ensure regular drills and awareness programs.",
        Preparedness,
        NDMA,
    ),
    s(
        "Cyclone Evacuation Protocol",
        "Upon cyclone warning, authorities should evacuate vulnerable coastal populations to designated cyclone shelters, deploy emergency response teams, and ensure essential supplies for at least 72 hours.",
        Response,
        SDMA,
    ),
    s(
        "Post-Cyclone Damage Assessment Guidelines",
        "After cyclone passage, conduct immediate aerial surveys, restore communication networks, clear debris, and provide emergency medical assistance to affected populations.",
        Recovery,
        MHA,
    ),
    s(
        "Cyclone Resistant Infrastructure Standards",
        "All coastal structures should comply with BIS standards for wind resistance. Government buildings in cyclone-prone areas must be constructed as multi-purpose cyclone shelters.",
        Mitigation,
        BIS,
    ),
];

const DROUGHT: &[StaticStrategy] = &[
    s(
        "Manual for Drought Management",
        "This comprehensive manual outlines procedures for declaration of drought, implementation of relief measures, and coordination mechanisms between central and state authorities.",
        Response,
        "Ministry of Agriculture & Farmers Welfare",
    ),
    s(
        "National Water Conservation Strategy",
        "States should implement watershed development programs, rainwater harvesting, and promote drought-resistant crops. The Mahatma Gandhi National Rural Employment Guarantee Act (MGNREGA) should be leveraged for water conservation works.",
        Mitigation,
        "Ministry of Jal Shakti",
    ),
    s(
        "Drought Monitoring Framework",
        "The India Meteorological Department (IMD) and state agriculture departments should monitor rainfall deficiency, reservoir levels, groundwater status, and crop conditions to provide early warnings of drought conditions.",
        Preparedness,
        IMD,
    ),
    s(
        "Drought Relief Implementation Guidelines",
        "During declared droughts, authorities should ensure drinking water supply through tankers, provide fodder for livestock, implement food security measures, and offer employment through MGNREGA.",
        Response,
        "State Relief Commissioners",
    ),
];

const EARTHQUAKE: &[StaticStrategy] = &[
    s(
        "National Earthquake Response Protocol",
        "Immediate deployment of Urban Search and Rescue Teams, establishment of Emergency Operations Centers, and activation of medical response teams. The protocol includes building damage assessment and categorization procedures.",
        Response,
        NDMA,
    ),
    s(
        "Earthquake Preparedness Guidelines",
        "Conducts regular mock drills, structural assessments of critical infrastructure, and public awareness campaigns on earthquake safety. Maintain emergency supplies and develop family emergency plans.",
        Preparedness,
        "NDMA and State Disaster Management Authorities",
    ),
    s(
        "Post-Earthquake Reconstruction Policy",
        "Framework for reconstruction with earthquake-resistant designs, financial assistance schemes for affected families, and guidelines for transitional shelter arrangements.",
        Recovery,
        MOHUA,
    ),
    s(
        "National Building Code - Seismic Provisions",
        "Mandatory implementation of seismic codes in construction, seismic microzonation of urban areas, and retrofitting of existing critical infrastructure in high-risk zones.",
        Mitigation,
        BIS,
    ),
];

const LANDSLIDE: &[StaticStrategy] = &[
    s(
        "National Landslide Risk Management Strategy",
        "Comprehensive approach to landslide risk assessment, early warning systems in vulnerable hill areas, and regulation of construction activities on steep slopes.",
        Preparedness,
        "Geological Survey of India (GSI)",
    ),
    s(
        "Landslide Response Guidelines",
        "Protocols for immediate search and rescue operations, temporary relocation of affected communities, and restoration of critical infrastructure like roads and communication networks.",
        Response,
        "National Disaster Response Force (NDRF)",
    ),
    s(
        "Hill Area Development Program",
        "Long-term strategy for sustainable development in landslide-prone regions, including afforestation, proper drainage systems, and slope stabilization measures.",
        Mitigation,
        MOEFCC,
    ),
    s(
        "Guidelines for Reconstruction in Landslide Affected Areas",
        "Technical specifications for rebuilding in affected areas, relocation policies for highly vulnerable settlements, and land-use planning to minimize future risks.",
        Recovery,
        SDMA,
    ),
];

const HEAT_WAVE: &[StaticStrategy] = &[
    s(
        "National Action Plan on Heat Related Illnesses",
        "Comprehensive strategy for prevention and management of heat-related illnesses, including public cooling centers, emergency medical protocols, and vulnerable population identification.",
        Response,
        MOHFW,
    ),
    s(
        "Heat Wave Guidelines for States",
        "Framework for declaring heat waves, color-coded alert system, and standard operating procedures for different departments during extreme heat events.",
        Preparedness,
        NDMA,
    ),
    s(
        "Cool Roof Program",
        "Implementation of cool roofs in public buildings, incentives for private adoption, and urban planning guidelines to reduce urban heat island effect.",
        Mitigation,
        MOHUA,
    ),
    s(
        "Heat Action Plan for Vulnerable Groups",
        "Special provisions for outdoor workers, elderly, children, and pregnant women during heat waves, including work hour adjustments and targeted outreach.",
        Response,
        "Ministry of Labour and Employment",
    ),
];

const COLD_WAVE: &[StaticStrategy] = &[
    s(
        "Cold Wave Management Plan",
        "Guidelines for establishing warming shelters, distribution of blankets and warm clothing, and monitoring of vulnerable populations including homeless individuals.",
        Response,
        SDMA,
    ),
    s(
        "Winter Preparedness Advisory",
        "Early warnings for cold wave conditions, public education on preventing cold-related illnesses, and preparation of emergency services for increased demand.",
        Preparedness,
        IMD,
    ),
    s(
        "Guidelines for Schools During Cold Waves",
        "Protocol for school closures, adjustment of school hours, and ensuring adequate heating in educational institutions during extreme cold conditions.",
        Response,
        "Ministry of Education",
    ),
    s(
        "Cold Wave Relief Fund Utilization Guidelines",
        "Framework for allocation and utilization of funds for cold wave relief, including procurement of essential supplies and compensation for affected families.",
        Recovery,
        MHA,
    ),
];

const FOREST_FIRE: &[StaticStrategy] = &[
    s(
        "National Action Plan on Forest Fires",
        "Comprehensive strategy for prevention, detection, and suppression of forest fires, including use of satellite monitoring, rapid response teams, and community involvement.",
        Preparedness,
        MOEFCC,
    ),
    s(
        "Forest Fire Crisis Management Plan",
        "Standard operating procedures for various agencies during forest fire emergencies, coordination mechanisms, and resource mobilization protocols.",
        Response,
        "Forest Survey of India (FSI)",
    ),
    s(
        "Forest Fire Prevention Guidelines",
        "Implementation of fire lines, controlled burning techniques, and community awareness programs in vulnerable forest areas before fire season.",
        Mitigation,
        "State Forest Departments",
    ),
    s(
        "Post-Fire Ecosystem Restoration Plan",
        "Framework for assessment of ecological damage, reforestation strategies, soil conservation measures, and monitoring of recovery progress.",
        Recovery,
        MOEFCC,
    ),
];

const URBAN_FLOODING: &[StaticStrategy] = &[
    s(
        "Urban Flooding Standard Operating Procedure",
        "Guidelines for urban local bodies on pump deployment, drainage clearance, traffic management, and evacuation of low-lying urban areas during flooding events.",
        Response,
        MOHUA,
    ),
    s(
        "Urban Drainage Design Manual",
        "Technical specifications for urban drainage systems, integration of blue-green infrastructure, and implementation of stormwater management practices.",
        Mitigation,
        "Central Public Works Department (CPWD)",
    ),
    s(
        "Guidelines for Urban Flood Early Warning Systems",
        "Implementation of automated rain gauges, flood sensors, and citizen reporting systems to provide localized flood warnings in urban areas.",
        Preparedness,
        NDMA,
    ),
    s(
        "Post-Urban Flooding Disease Prevention Protocol",
        "Measures to prevent waterborne diseases after urban flooding, including water purification, vector control, and public health surveillance.",
        Recovery,
        MOHFW,
    ),
];

const GENERIC: &[StaticStrategy] = &[
    s(
        "Generic Disaster Response Protocol",
        "The National Disaster Response Force (NDRF) should be deployed for search and rescue operations. State authorities should establish relief camps and provide essential supplies to affected populations.",
        Response,
        NDMA,
    ),
    s(
        "Community-Based Disaster Management",
        "Local authorities should establish Community Disaster Response Teams, conduct regular drills, and maintain emergency supply stocks at the community level.",
        Preparedness,
        SDMA,
    ),
];

fn table_for(disaster_type: Option<DisasterType>) -> &'static [StaticStrategy] {
    match disaster_type {
        Some(DisasterType::Flood) => FLOOD,
        Some(DisasterType::Cyclone) => CYCLONE,
        Some(DisasterType::Drought) => DROUGHT,
        Some(DisasterType::Earthquake) => EARTHQUAKE,
        Some(DisasterType::Landslide) => LANDSLIDE,
        Some(DisasterType::HeatWave) => HEAT_WAVE,
        Some(DisasterType::ColdWave) => COLD_WAVE,
        Some(DisasterType::ForestFire) => FOREST_FIRE,
        Some(DisasterType::UrbanFlooding) => URBAN_FLOODING,
        Some(DisasterType::Tsunami) | None => GENERIC,
    }
}

/// Built-in guideline records for a disaster type name, dated `today`.
/// Unrecognized types get the two generic records.
pub fn default_strategies(disaster_type: &str, today: NaiveDate) -> Vec<StrategyRecord> {
    let date = today.format("%Y-%m-%d").to_string();
    table_for(DisasterType::parse(disaster_type))
        .iter()
        .map(|entry| StrategyRecord {
            title: entry.title.to_string(),
            body: entry.body.to_string(),
            phase: Some(entry.phase),
            source: entry.authority.to_string(),
            kind: GUIDELINE_KIND.to_string(),
            from_api: false,
            date: Some(date.clone()),
            url: None,
            file_url: None,
        })
        .collect()
}
