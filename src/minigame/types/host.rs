//! Host boundary message types
//!
//! Outbound payloads share one untyped string channel and are told apart
//! only by their field set, so both shapes are kept strict: a receiver can
//! sniff a payload with [`HostMessage::parse`] and reject anything else.

use serde::{Deserialize, Serialize};

use super::DicePair;

/// `{"dice1": n, "dice2": m}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiceResultMessage {
    pub dice1: u8,
    pub dice2: u8,
}

impl From<DicePair> for DiceResultMessage {
    fn from(pair: DicePair) -> Self {
        Self {
            dice1: pair.dice1.get(),
            dice2: pair.dice2.get(),
        }
    }
}

/// `{"name": s, "buildIndex": i}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneLoadedMessage {
    pub name: String,
    #[serde(rename = "buildIndex")]
    pub build_index: i32,
}

/// Every payload the game sends to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HostMessage {
    DiceResult(DiceResultMessage),
    SceneLoaded(SceneLoadedMessage),
}

impl HostMessage {
    pub fn dice_result(pair: DicePair) -> Self {
        HostMessage::DiceResult(pair.into())
    }

    pub fn scene_loaded(name: impl Into<String>, build_index: i32) -> Self {
        HostMessage::SceneLoaded(SceneLoadedMessage {
            name: name.into(),
            build_index,
        })
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| format!("Failed to serialize host message: {}", e))
    }

    /// Identify a payload by its shape.
    pub fn parse(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Unrecognized host message {}: {}", json, e))
    }
}

/// Entry points the host can invoke on the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    RollDice,
}

impl HostCommand {
    pub fn name(&self) -> &'static str {
        match self {
            HostCommand::RollDice => "RollDice",
        }
    }

    /// Parse a host method name (case-insensitive, surrounding whitespace ignored).
    pub fn parse(s: &str) -> Option<HostCommand> {
        match s.trim().to_lowercase().as_str() {
            "rolldice" => Some(HostCommand::RollDice),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minigame::types::FaceValue;

    #[test]
    fn test_dice_result_shape() {
        let pair = DicePair::new(FaceValue::new(4), FaceValue::new(2));
        let json = HostMessage::dice_result(pair).to_json().unwrap();
        assert_eq!(json, r#"{"dice1":4,"dice2":2}"#);
    }

    #[test]
    fn test_scene_loaded_shape() {
        let json = HostMessage::scene_loaded("DiceBowl", 3).to_json().unwrap();
        assert_eq!(json, r#"{"name":"DiceBowl","buildIndex":3}"#);
    }

    #[test]
    fn test_parse_sniffs_shape() {
        assert_eq!(
            HostMessage::parse(r#"{"dice1":1,"dice2":6}"#),
            Ok(HostMessage::DiceResult(DiceResultMessage { dice1: 1, dice2: 6 }))
        );
        assert_eq!(
            HostMessage::parse(r#"{"buildIndex":0,"name":"Main"}"#),
            Ok(HostMessage::scene_loaded("Main", 0))
        );
    }

    #[test]
    fn test_parse_rejects_mixed_or_unknown_shapes() {
        assert!(HostMessage::parse(r#"{"dice1":1}"#).is_err());
        assert!(HostMessage::parse(r#"{"dice1":1,"dice2":2,"name":"x"}"#).is_err());
        assert!(HostMessage::parse("not json").is_err());
    }

    #[test]
    fn test_host_command_parse() {
        assert_eq!(HostCommand::parse("RollDice"), Some(HostCommand::RollDice));
        assert_eq!(HostCommand::parse("  rolldice\n"), Some(HostCommand::RollDice));
        assert_eq!(HostCommand::parse("ShakeBowl"), None);
        assert_eq!(HostCommand::parse(""), None);
        assert_eq!(HostCommand::RollDice.name(), "RollDice");
    }
}
