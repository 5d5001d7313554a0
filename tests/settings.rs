//! Settings deserialization through serde.

use std::collections::HashMap;

use checkers_engine::board::{Optimization, ScoringMode, SearchParams};
use checkers_engine::config::{BotSettings, BOT_SECTION};

#[test]
fn deserializes_bot_section() {
    let json = r#"{
        "Bot": {
            "NoRandom": true,
            "BotScoringType": "NumberAndPotential",
            "Optimization": "O2"
        }
    }"#;
    let sections: HashMap<String, BotSettings> = serde_json::from_str(json).expect("valid json");
    let bot = sections[BOT_SECTION];

    assert!(bot.no_random);
    assert_eq!(bot.scoring, ScoringMode::NumberAndPotential);
    assert_eq!(bot.optimization, Optimization::O2);

    let params = SearchParams::from_settings(&bot, 5);
    assert_eq!(params.max_depth, 5);
    assert_eq!(params.optimization, Optimization::O2);
    assert!(params.no_random);
}

#[test]
fn rejects_unknown_scoring_type() {
    let json = r#"{"NoRandom": false, "BotScoringType": "Potential", "Optimization": "O1"}"#;
    assert!(serde_json::from_str::<BotSettings>(json).is_err());
}

#[test]
fn round_trips_through_json() {
    let bot = BotSettings {
        no_random: false,
        scoring: ScoringMode::Number,
        optimization: Optimization::O0,
    };
    let json = serde_json::to_string(&bot).expect("serializable");
    assert!(json.contains("\"BotScoringType\":\"Number\""));
    assert!(json.contains("\"NoRandom\":false"));
    let back: BotSettings = serde_json::from_str(&json).expect("valid json");
    assert_eq!(back, bot);
}
