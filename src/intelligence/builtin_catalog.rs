// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Activities shipped with the planner

use super::time_of_day::TimeOfDay as D;
use super::weather::{TempCategory as T, WeatherCondition as W, WeatherSuitability as S};
use crate::models::{
    Activity, ActivityCategory as C, IntensityLevel as I, LocationType as L,
};

/// Compile-time authoring form of an [`Activity`]
#[derive(Debug, Clone, Copy)]
pub struct ActivityDefinition {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub suitability: &'static [(W, S)],
    pub temps: &'static [T],
    pub times: &'static [D],
    pub location: L,
    pub intensity: I,
    pub category: C,
}

impl From<&ActivityDefinition> for Activity {
    fn from(definition: &ActivityDefinition) -> Self {
        Self {
            title: definition.title.to_string(),
            description: definition.description.to_string(),
            icon: definition.icon.to_string(),
            weather_suitability: definition.suitability.iter().copied().collect(),
            temp_categories: definition.temps.iter().copied().collect(),
            times_of_day: definition.times.to_vec(),
            location_type: definition.location,
            intensity: definition.intensity,
            category: definition.category,
        }
    }
}

const ALL_TEMPS: &[T] = &[T::Cool, T::Comfortable, T::Warm, T::Hot, T::Scorching];
const MILD_TEMPS: &[T] = &[T::Cool, T::Comfortable, T::Warm];
const FAIR_TEMPS: &[T] = &[T::Comfortable, T::Warm];
const SUMMER_TEMPS: &[T] = &[T::Warm, T::Hot, T::Scorching];

// Indoor venues are fine whatever it is doing outside
const SHELTERED: &[(W, S)] = &[
    (W::Indoor, S::Perfect),
    (W::CoveredOutdoor, S::Acceptable),
    (W::Clear, S::Acceptable),
    (W::Cloudy, S::Good),
    (W::Rain, S::Perfect),
    (W::Drizzle, S::Good),
    (W::Thunderstorm, S::Perfect),
    (W::Snow, S::Good),
    (W::Mist, S::Good),
];

pub static BUILTIN_ACTIVITIES: &[ActivityDefinition] = &[
    // Fitness
    ActivityDefinition {
        title: "Morning Jog",
        description: "An easy run around the neighbourhood to start the day",
        icon: "🏃",
        suitability: &[(W::Clear, S::Perfect), (W::Cloudy, S::Good), (W::Drizzle, S::Acceptable), (W::Mist, S::Poor)],
        temps: &[T::Cool, T::Comfortable],
        times: &[D::Morning],
        location: L::Outdoor,
        intensity: I::Moderate,
        category: C::Fitness,
    },
    ActivityDefinition {
        title: "Cycling Loop",
        description: "Ride a scenic loop through quiet streets and bike paths",
        icon: "🚴",
        suitability: &[(W::Clear, S::Perfect), (W::Cloudy, S::Perfect), (W::Drizzle, S::Poor), (W::Rain, S::Unsuitable)],
        temps: FAIR_TEMPS,
        times: &[D::Morning, D::Afternoon],
        location: L::Outdoor,
        intensity: I::Heavy,
        category: C::Fitness,
    },
    ActivityDefinition {
        title: "Gym Session",
        description: "Strength and cardio workout at the local gym",
        icon: "🏋️",
        suitability: SHELTERED,
        temps: ALL_TEMPS,
        times: &[D::Anytime],
        location: L::Indoor,
        intensity: I::Heavy,
        category: C::Fitness,
    },
    ActivityDefinition {
        title: "Indoor Climbing",
        description: "Boulder or top-rope at a climbing gym",
        icon: "🧗",
        suitability: SHELTERED,
        temps: ALL_TEMPS,
        times: &[D::Afternoon, D::Evening],
        location: L::Indoor,
        intensity: I::Heavy,
        category: C::Fitness,
    },
    ActivityDefinition {
        title: "Beach Volleyball",
        description: "A few friendly sets on the sand",
        icon: "🏐",
        suitability: &[(W::Clear, S::Perfect), (W::Cloudy, S::Good), (W::WaterActivity, S::Good)],
        temps: &[T::Warm, T::Hot],
        times: &[D::Morning, D::Afternoon],
        location: L::Outdoor,
        intensity: I::Heavy,
        category: C::Fitness,
    },
    ActivityDefinition {
        title: "Swimming Laps",
        description: "Cool off with laps at the pool",
        icon: "🏊",
        suitability: &[(W::WaterActivity, S::Perfect), (W::Clear, S::Perfect), (W::Cloudy, S::Good), (W::Indoor, S::Good), (W::CoveredOutdoor, S::Good)],
        temps: SUMMER_TEMPS,
        times: &[D::Morning, D::Noon, D::Afternoon],
        location: L::Flexible,
        intensity: I::Moderate,
        category: C::Fitness,
    },
    // Food
    ActivityDefinition {
        title: "Picnic in the Park",
        description: "Pack a basket and find a spot on the grass",
        icon: "🧺",
        suitability: &[(W::Clear, S::Perfect), (W::Cloudy, S::Acceptable), (W::Rain, S::Unsuitable)],
        temps: FAIR_TEMPS,
        times: &[D::Noon, D::Afternoon],
        location: L::Outdoor,
        intensity: I::Light,
        category: C::Food,
    },
    ActivityDefinition {
        title: "Try a New Café",
        description: "Find a café you have never been to and order something unusual",
        icon: "☕",
        suitability: SHELTERED,
        temps: ALL_TEMPS,
        times: &[D::Morning, D::Afternoon],
        location: L::Indoor,
        intensity: I::Light,
        category: C::Food,
    },
    ActivityDefinition {
        title: "Food Market Crawl",
        description: "Sample street food at the weekend market",
        icon: "🌮",
        suitability: &[(W::Clear, S::Perfect), (W::Cloudy, S::Good), (W::CoveredOutdoor, S::Perfect), (W::Drizzle, S::Acceptable)],
        temps: MILD_TEMPS,
        times: &[D::Noon, D::Evening],
        location: L::Flexible,
        intensity: I::Light,
        category: C::Food,
    },
    ActivityDefinition {
        title: "Cook a New Recipe",
        description: "Pick a dish from a cuisine you rarely cook",
        icon: "🍳",
        suitability: SHELTERED,
        temps: ALL_TEMPS,
        times: &[D::Evening],
        location: L::Indoor,
        intensity: I::Light,
        category: C::Food,
    },
    ActivityDefinition {
        title: "Ice Cream Stroll",
        description: "Walk to the best ice cream shop in town",
        icon: "🍦",
        suitability: &[(W::Clear, S::Perfect), (W::Cloudy, S::Acceptable)],
        temps: SUMMER_TEMPS,
        times: &[D::Afternoon, D::Evening],
        location: L::Outdoor,
        intensity: I::Light,
        category: C::Food,
    },
    // Nature
    ActivityDefinition {
        title: "Nature Hike",
        description: "Follow a trail through the woods or hills nearby",
        icon: "🥾",
        suitability: &[(W::Clear, S::Perfect), (W::Cloudy, S::Good), (W::Mist, S::Acceptable), (W::Drizzle, S::Poor)],
        temps: &[T::Cool, T::Comfortable, T::Warm],
        times: &[D::Morning, D::Noon],
        location: L::Outdoor,
        intensity: I::Moderate,
        category: C::Nature,
    },
    ActivityDefinition {
        title: "Botanical Garden Visit",
        description: "Wander the glasshouses and flower beds",
        icon: "🌺",
        suitability: &[(W::Clear, S::Perfect), (W::Cloudy, S::Good), (W::CoveredOutdoor, S::Good), (W::Drizzle, S::Acceptable)],
        temps: FAIR_TEMPS,
        times: &[D::Morning, D::Afternoon],
        location: L::Flexible,
        intensity: I::Light,
        category: C::Nature,
    },
    ActivityDefinition {
        title: "Stargazing",
        description: "Find a dark spot away from the city lights",
        icon: "🔭",
        suitability: &[(W::Clear, S::Perfect), (W::Cloudy, S::Poor)],
        temps: MILD_TEMPS,
        times: &[D::Midnight],
        location: L::Outdoor,
        intensity: I::Light,
        category: C::Nature,
    },
    ActivityDefinition {
        title: "Kayaking",
        description: "Paddle along the river or a calm lake",
        icon: "🛶",
        suitability: &[(W::WaterActivity, S::Perfect), (W::Clear, S::Perfect), (W::Cloudy, S::Good)],
        temps: &[T::Warm, T::Hot],
        times: &[D::Morning, D::Afternoon],
        location: L::Outdoor,
        intensity: I::Heavy,
        category: C::Nature,
    },
    ActivityDefinition {
        title: "Snowshoe Walk",
        description: "Explore a snowy trail at an easy pace",
        icon: "❄️",
        suitability: &[(W::Snow, S::Perfect), (W::Clear, S::Good), (W::Cloudy, S::Acceptable)],
        temps: &[T::Cool],
        times: &[D::Morning, D::Noon],
        location: L::Outdoor,
        intensity: I::Moderate,
        category: C::Nature,
    },
    // Shopping
    ActivityDefinition {
        title: "Mall Browsing",
        description: "Window-shop and grab a snack in air-conditioned comfort",
        icon: "🛍️",
        suitability: SHELTERED,
        temps: ALL_TEMPS,
        times: &[D::Noon, D::Afternoon, D::Evening],
        location: L::Indoor,
        intensity: I::Light,
        category: C::Shopping,
    },
    ActivityDefinition {
        title: "Flea Market Hunt",
        description: "Dig through stalls for vintage finds",
        icon: "🏷️",
        suitability: &[(W::Clear, S::Perfect), (W::Cloudy, S::Perfect), (W::CoveredOutdoor, S::Good)],
        temps: MILD_TEMPS,
        times: &[D::Morning],
        location: L::Outdoor,
        intensity: I::Light,
        category: C::Shopping,
    },
    // Entertainment
    ActivityDefinition {
        title: "Movie Marathon",
        description: "Queue up a trilogy and make popcorn",
        icon: "🎬",
        suitability: SHELTERED,
        temps: ALL_TEMPS,
        times: &[D::Afternoon, D::Evening, D::Midnight],
        location: L::Indoor,
        intensity: I::Light,
        category: C::Entertainment,
    },
    ActivityDefinition {
        title: "Bowling",
        description: "A few frames at the local alley",
        icon: "🎳",
        suitability: SHELTERED,
        temps: ALL_TEMPS,
        times: &[D::Afternoon, D::Evening],
        location: L::Indoor,
        intensity: I::Moderate,
        category: C::Entertainment,
    },
    ActivityDefinition {
        title: "Open-Air Concert",
        description: "Catch a live show in the park",
        icon: "🎶",
        suitability: &[(W::Clear, S::Perfect), (W::Cloudy, S::Good), (W::CoveredOutdoor, S::Good)],
        temps: FAIR_TEMPS,
        times: &[D::Evening],
        location: L::Outdoor,
        intensity: I::Light,
        category: C::Entertainment,
    },
    // Social
    ActivityDefinition {
        title: "Board Game Night",
        description: "Invite friends over for a round of strategy games",
        icon: "🎲",
        suitability: SHELTERED,
        temps: ALL_TEMPS,
        times: &[D::Evening, D::Midnight],
        location: L::Indoor,
        intensity: I::Light,
        category: C::Social,
    },
    ActivityDefinition {
        title: "Backyard Barbecue",
        description: "Fire up the grill and invite the neighbours",
        icon: "🍖",
        suitability: &[(W::Clear, S::Perfect), (W::Cloudy, S::Good), (W::CoveredOutdoor, S::Acceptable)],
        temps: &[T::Comfortable, T::Warm, T::Hot],
        times: &[D::Afternoon, D::Evening],
        location: L::Outdoor,
        intensity: I::Light,
        category: C::Social,
    },
    // Educational
    ActivityDefinition {
        title: "Library Visit",
        description: "Browse the shelves and pick up a new book",
        icon: "📚",
        suitability: SHELTERED,
        temps: ALL_TEMPS,
        times: &[D::Morning, D::Noon, D::Afternoon],
        location: L::Indoor,
        intensity: I::Light,
        category: C::Educational,
    },
    ActivityDefinition {
        title: "Science Museum",
        description: "Hands-on exhibits and a planetarium show",
        icon: "🔬",
        suitability: SHELTERED,
        temps: ALL_TEMPS,
        times: &[D::Morning, D::Noon, D::Afternoon],
        location: L::Indoor,
        intensity: I::Light,
        category: C::Educational,
    },
    // Leisure
    ActivityDefinition {
        title: "Read on the Balcony",
        description: "Settle in with a book and a warm drink",
        icon: "📖",
        suitability: &[(W::CoveredOutdoor, S::Perfect), (W::Clear, S::Good), (W::Cloudy, S::Good), (W::Drizzle, S::Good), (W::Rain, S::Acceptable)],
        temps: FAIR_TEMPS,
        times: &[D::Anytime],
        location: L::Flexible,
        intensity: I::Light,
        category: C::Leisure,
    },
    ActivityDefinition {
        title: "Photography Walk",
        description: "Wander with a camera and look for interesting light",
        icon: "📷",
        suitability: &[(W::Clear, S::Good), (W::Cloudy, S::Good), (W::Mist, S::Perfect), (W::Snow, S::Good)],
        temps: MILD_TEMPS,
        times: &[D::Morning, D::Evening],
        location: L::Outdoor,
        intensity: I::Light,
        category: C::Leisure,
    },
    // Cultural
    ActivityDefinition {
        title: "Art Gallery Tour",
        description: "See the current exhibitions at a local gallery",
        icon: "🖼️",
        suitability: SHELTERED,
        temps: ALL_TEMPS,
        times: &[D::Noon, D::Afternoon],
        location: L::Indoor,
        intensity: I::Light,
        category: C::Cultural,
    },
    ActivityDefinition {
        title: "Historic Walking Tour",
        description: "Follow a self-guided route past the old town landmarks",
        icon: "🏛️",
        suitability: &[(W::Clear, S::Perfect), (W::Cloudy, S::Perfect), (W::Mist, S::Acceptable)],
        temps: MILD_TEMPS,
        times: &[D::Morning, D::Afternoon],
        location: L::Outdoor,
        intensity: I::Moderate,
        category: C::Cultural,
    },
    // Family
    ActivityDefinition {
        title: "Zoo Day",
        description: "Spend the day visiting the animals",
        icon: "🦁",
        suitability: &[(W::Clear, S::Perfect), (W::Cloudy, S::Good), (W::Drizzle, S::Poor)],
        temps: FAIR_TEMPS,
        times: &[D::Morning, D::Noon],
        location: L::Outdoor,
        intensity: I::Moderate,
        category: C::Family,
    },
    ActivityDefinition {
        title: "Aquarium Visit",
        description: "Watch the sharks and jellyfish drift by",
        icon: "🐠",
        suitability: SHELTERED,
        temps: ALL_TEMPS,
        times: &[D::Morning, D::Noon, D::Afternoon],
        location: L::Indoor,
        intensity: I::Light,
        category: C::Family,
    },
    ActivityDefinition {
        title: "Build a Snowman",
        description: "Roll up a snowman with the whole family",
        icon: "⛄",
        suitability: &[(W::Snow, S::Perfect), (W::Cloudy, S::Acceptable)],
        temps: &[T::Cool],
        times: &[D::Morning, D::Noon, D::Afternoon],
        location: L::Outdoor,
        intensity: I::Moderate,
        category: C::Family,
    },
    // Wellness
    ActivityDefinition {
        title: "Yoga Session",
        description: "A calm flow to stretch and reset",
        icon: "🧘",
        suitability: &[(W::Indoor, S::Perfect), (W::Clear, S::Good), (W::Cloudy, S::Good), (W::Rain, S::Good), (W::Thunderstorm, S::Good), (W::Snow, S::Good), (W::Mist, S::Good), (W::CoveredOutdoor, S::Perfect)],
        temps: ALL_TEMPS,
        times: &[D::Morning, D::Evening],
        location: L::Flexible,
        intensity: I::Light,
        category: C::Wellness,
    },
    ActivityDefinition {
        title: "Spa Afternoon",
        description: "Sauna, steam room and a long soak",
        icon: "🛁",
        suitability: SHELTERED,
        temps: &[T::Cool, T::Comfortable],
        times: &[D::Afternoon, D::Evening],
        location: L::Indoor,
        intensity: I::Light,
        category: C::Wellness,
    },
];
