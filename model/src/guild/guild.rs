use serde::{Deserialize, Serialize};

use crate::Snowflake;

/// The subset of a guild object returned by `GET /guilds/{id}` that is needed to identify a
/// guild. Unknown fields are ignored.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Guild {
    pub id: Snowflake,
    pub name: Box<str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Box<str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<Snowflake>,
}

impl PartialEq for Guild {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_partial_guild() {
        let raw = r#"{
            "id": "197038439483310086",
            "name": "Discord Testers",
            "icon": "f64c482b807da4f539cff778d174971c",
            "description": null,
            "owner_id": "73193882359173120",
            "roles": [],
            "stickers": []
        }"#;

        let guild: Guild = serde_json::from_str(raw).unwrap();
        assert_eq!(guild.id, Snowflake(197038439483310086));
        assert_eq!(&*guild.name, "Discord Testers");
        assert!(guild.description.is_none());
        assert_eq!(guild.owner_id, Some(Snowflake(73193882359173120)));
    }
}
