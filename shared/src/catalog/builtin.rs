//! Built-in tables for the monitored Indian cities

use std::collections::HashMap;

use super::{CatalogParts, KeywordFamily};
use crate::models::{City, DisasterType, Season};

use DisasterType::*;

pub(super) fn parts() -> CatalogParts {
    CatalogParts {
        cities: cities(),
        seasonal_affinity: seasonal_affinity(),
        descriptions: to_owned_table(DESCRIPTIONS),
        precautions: to_owned_table(PRECAUTIONS),
        caption_keywords: caption_keywords(),
    }
}

fn cities() -> Vec<City> {
    vec![
        City::new("Mumbai", 19.0760, 72.8777, &[Flood, UrbanFlooding, Cyclone]),
        City::new("Delhi", 28.6139, 77.2090, &[HeatWave, ColdWave, UrbanFlooding]),
        City::new("Bangalore", 12.9716, 77.5946, &[Drought, UrbanFlooding]),
        City::new("Hyderabad", 17.3850, 78.4867, &[Flood, HeatWave]),
        City::new("Chennai", 13.0827, 80.2707, &[Flood, Cyclone, UrbanFlooding]),
        City::new("Kolkata", 22.5726, 88.3639, &[Flood, Cyclone]),
        City::new("Pune", 18.5204, 73.8567, &[Landslide, Flood]),
        City::new("Ahmedabad", 23.0225, 72.5714, &[HeatWave, Flood]),
        City::new("Jaipur", 26.9124, 75.7873, &[HeatWave, Drought]),
        City::new("Surat", 21.1702, 72.8311, &[Flood, Cyclone]),
        City::new("Lucknow", 26.8467, 80.9462, &[Flood, HeatWave, ColdWave]),
        City::new("Kanpur", 26.4499, 80.3319, &[Flood, HeatWave, ColdWave]),
        City::new("Nagpur", 21.1458, 79.0882, &[HeatWave, Drought]),
        City::new("Indore", 22.7196, 75.8577, &[HeatWave]),
        City::new("Thane", 19.2183, 72.9781, &[Flood, Landslide]),
        City::new("Bhopal", 23.2599, 77.4126, &[Flood]),
        City::new("Visakhapatnam", 17.6868, 83.2185, &[Cyclone, Flood]),
        City::new("Patna", 25.5941, 85.1376, &[Flood]),
        City::new("Vadodara", 22.3072, 73.1812, &[Flood]),
        City::new("Ghaziabad", 28.6692, 77.4538, &[UrbanFlooding, HeatWave, ColdWave]),
    ]
}

fn seasonal_affinity() -> HashMap<DisasterType, Vec<Season>> {
    HashMap::from([
        (Flood, vec![Season::Monsoon]),
        (Cyclone, vec![Season::Monsoon, Season::PostMonsoon]),
        (Drought, vec![Season::Summer]),
        (HeatWave, vec![Season::Summer]),
        (ColdWave, vec![Season::Winter]),
        (Landslide, vec![Season::Monsoon]),
        (ForestFire, vec![Season::Summer]),
        (UrbanFlooding, vec![Season::Monsoon]),
    ])
}

fn caption_keywords() -> Vec<KeywordFamily> {
    vec![
        KeywordFamily::new(
            Flood,
            &["flood", "flooded", "flooding", "water level", "submerged", "inundated"],
        ),
        KeywordFamily::new(
            ForestFire,
            &["fire", "burning", "flames", "smoke", "wildfire", "forest fire"],
        ),
        KeywordFamily::new(
            Earthquake,
            &["earthquake", "quake", "tremor", "collapsed", "rubble", "destruction"],
        ),
        KeywordFamily::new(
            Cyclone,
            &["cyclone", "hurricane", "typhoon", "storm", "wind", "tornadic"],
        ),
        KeywordFamily::new(
            Landslide,
            &["landslide", "mudslide", "rockfall", "collapsed hill", "debris flow"],
        ),
        KeywordFamily::new(Drought, &["drought", "dry", "arid", "parched", "cracked earth"]),
        KeywordFamily::new(Tsunami, &["tsunami", "tidal wave", "giant wave"]),
        KeywordFamily::new(HeatWave, &["heat wave", "extreme heat", "scorching"]),
    ]
}

fn to_owned_table(table: &[(DisasterType, &[&str])]) -> HashMap<DisasterType, Vec<String>> {
    table
        .iter()
        .map(|(t, entries)| (*t, entries.iter().map(|e| e.to_string()).collect()))
        .collect()
}

/// Descriptions indexed by severity - 1
const DESCRIPTIONS: &[(DisasterType, &[&str])] = &[
    (
        Flood,
        &[
            "Minor flooding possible in low-lying areas",
            "Moderate flooding expected in vulnerable areas",
            "Significant flooding likely, affecting residential areas",
            "Major flooding expected, potential for evacuations",
            "Severe flooding predicted, high risk to life and property",
        ],
    ),
    (
        Cyclone,
        &[
            "Mild cyclonic conditions possible",
            "Moderate cyclonic activity expected",
            "Strong cyclone likely, prepare for heavy rain and winds",
            "Severe cyclone expected, significant damage possible",
            "Catastrophic cyclone predicted, extreme danger to life and property",
        ],
    ),
    (
        Drought,
        &[
            "Mild water scarcity possible",
            "Moderate drought conditions expected",
            "Significant drought likely, affecting agriculture",
            "Severe drought expected, water rationing possible",
            "Extreme drought predicted, widespread crop failure likely",
        ],
    ),
    (
        Earthquake,
        &[
            "Minor tremors possible",
            "Moderate seismic activity expected",
            "Significant earthquake likely, prepare for aftershocks",
            "Major earthquake expected, significant damage possible",
            "Catastrophic earthquake predicted, extreme damage likely",
        ],
    ),
    (
        Landslide,
        &[
            "Minor soil movement possible in hilly areas",
            "Moderate landslide risk in vulnerable areas",
            "Significant landslides likely in multiple locations",
            "Major landslides expected, evacuations may be necessary",
            "Catastrophic landslides predicted, extreme danger in hilly regions",
        ],
    ),
    (
        Tsunami,
        &[
            "Minor sea level fluctuations possible along the coast",
            "Moderate tsunami waves possible in low-lying coastal areas",
            "Significant tsunami likely, coastal inundation expected",
            "Major tsunami expected, evacuation of coastal zones likely",
            "Catastrophic tsunami predicted, extreme danger along the coastline",
        ],
    ),
    (
        HeatWave,
        &[
            "Slightly above average temperatures expected",
            "Moderate heat wave conditions likely",
            "Significant heat wave expected, take precautions",
            "Severe heat wave predicted, high risk to vulnerable populations",
            "Extreme heat wave, life-threatening conditions likely",
        ],
    ),
    (
        ColdWave,
        &[
            "Slightly below average temperatures expected",
            "Moderate cold wave conditions likely",
            "Significant cold wave expected, take precautions",
            "Severe cold wave predicted, high risk to vulnerable populations",
            "Extreme cold wave, life-threatening conditions likely",
        ],
    ),
    (
        UrbanFlooding,
        &[
            "Minor urban flooding possible in low-lying areas",
            "Moderate urban flooding expected, traffic disruptions likely",
            "Significant urban flooding likely, affecting residential areas",
            "Major urban flooding expected, potential for evacuations",
            "Severe urban flooding predicted, high risk in metropolitan areas",
        ],
    ),
    (
        ForestFire,
        &[
            "Low risk of isolated forest fires",
            "Moderate forest fire conditions developing",
            "Significant forest fire risk, multiple outbreaks possible",
            "High forest fire danger, large-scale fires possible",
            "Extreme forest fire conditions, catastrophic spread likely",
        ],
    ),
];

const PRECAUTIONS: &[(DisasterType, &[&str])] = &[
    (
        Flood,
        &[
            "Move to higher ground immediately if instructed",
            "Avoid walking or driving through flood waters",
            "Prepare an emergency kit with essential items",
            "Follow evacuation orders from local authorities",
            "Turn off utilities at the main switches before evacuating",
        ],
    ),
    (
        Cyclone,
        &[
            "Secure loose items around your home",
            "Stay indoors during the cyclone",
            "Keep emergency supplies ready",
            "Listen to radio or TV for updates",
            "Evacuate if instructed by authorities",
        ],
    ),
    (
        Drought,
        &[
            "Conserve water at home and work",
            "Follow water usage restrictions",
            "Use drought-resistant plants in landscaping",
            "Harvest rainwater if possible",
            "Report water leaks to authorities",
        ],
    ),
    (
        Earthquake,
        &[
            "Drop, cover, and hold on during shaking",
            "Stay away from windows and exterior walls",
            "If outdoors, move to an open area away from buildings",
            "Be prepared for aftershocks",
            "Check for injuries and damage after the earthquake",
        ],
    ),
    (
        Landslide,
        &[
            "Be alert for unusual sounds that might indicate moving debris",
            "Evacuate if instructed by authorities",
            "Avoid areas prone to landslides",
            "Watch for flooding which may accompany landslides",
            "Contact local officials if you notice land movement",
        ],
    ),
    (
        Tsunami,
        &[
            "Move inland or to higher ground immediately after strong coastal shaking",
            "Follow tsunami warnings issued by INCOIS and local authorities",
            "Stay away from the shore and do not go to watch the waves",
            "Keep an emergency kit and a planned evacuation route ready",
            "Return only after authorities announce the all-clear",
        ],
    ),
    (
        HeatWave,
        &[
            "Stay in air-conditioned areas when possible",
            "Drink plenty of fluids, especially water",
            "Avoid strenuous activities during peak heat",
            "Wear lightweight, light-colored clothing",
            "Check on elderly neighbors and relatives",
        ],
    ),
    (
        ColdWave,
        &[
            "Stay indoors during extreme cold",
            "Layer clothing to stay warm",
            "Keep emergency heating equipment and supplies",
            "Protect pipes from freezing",
            "Check on elderly neighbors and relatives",
        ],
    ),
    (
        UrbanFlooding,
        &[
            "Move to higher floors in buildings",
            "Avoid driving or walking through flooded streets",
            "Be cautious around electrical equipment in flooded areas",
            "Follow evacuation orders",
            "Be aware of contaminated water",
        ],
    ),
    (
        ForestFire,
        &[
            "Evacuate immediately if instructed",
            "Create defensible space around your home",
            "Have an emergency kit ready",
            "Monitor local news for updates",
            "Keep windows and doors closed to prevent smoke inhalation",
        ],
    ),
];
