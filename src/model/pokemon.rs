use bson::oid::ObjectId;
use bson::serde_helpers::serialize_object_id_as_hex_string;
use serde::{Deserialize, Serialize};

/// A stored catalog entry. `no` and `name` are each unique; `name` is always lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    pub no: i64,
    pub name: String,
}

impl Pokemon {
    /// The stored fields overlaid with every field present in `patch`.
    ///
    /// This is what `update` returns; the record is not read back after the write,
    /// so anything the database itself changes on update is not reflected here.
    pub fn merged(&self, patch: &UpdatePokemon) -> Pokemon {
        let mut out = self.clone();
        if let Some(no) = patch.no {
            out.no = no;
        }
        if let Some(name) = &patch.name {
            out.name = name.clone();
        }
        out
    }
}

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreatePokemon {
    pub no: i64,
    pub name: String,
}

impl CreatePokemon {
    pub fn new(no: i64, name: impl Into<String>) -> Self {
        Self {
            no,
            name: name.into(),
        }
    }

    pub fn normalized(mut self) -> Self {
        self.name = self.name.to_lowercase();
        self
    }
}

/// Body of a partial update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdatePokemon {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UpdatePokemon {
    pub fn is_empty(&self) -> bool {
        self.no.is_none() && self.name.is_none()
    }

    pub fn normalized(mut self) -> Self {
        if let Some(name) = self.name.take() {
            self.name = Some(name.to_lowercase());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn merged_overlays_only_present_fields() {
        let stored = Pokemon {
            id: ObjectId::new(),
            no: 1,
            name: "bulbasaur".into(),
        };
        let patch = UpdatePokemon {
            no: None,
            name: Some("ivysaur".into()),
        };
        let merged = stored.merged(&patch);
        assert_eq!(merged.id, stored.id);
        assert_eq!(merged.no, 1);
        assert_eq!(merged.name, "ivysaur");
    }

    #[test]
    fn serializes_id_as_hex_string() {
        let id = ObjectId::parse_str("64b7f0c2a1b2c3d4e5f60718").unwrap();
        let value = serde_json::to_value(Pokemon {
            id,
            no: 25,
            name: "pikachu".into(),
        })
        .unwrap();
        assert_eq!(
            value,
            json!({ "_id": "64b7f0c2a1b2c3d4e5f60718", "no": 25, "name": "pikachu" })
        );
    }

    #[test]
    fn create_body_rejects_unknown_fields() {
        let err = serde_json::from_value::<CreatePokemon>(json!({ "no": 1, "name": "a", "level": 5 }));
        assert!(err.is_err());
    }

    #[test]
    fn normalization_lowercases_names() {
        assert_eq!(CreatePokemon::new(6, "ChArIzArD").normalized().name, "charizard");
        let patch = UpdatePokemon {
            no: Some(7),
            name: Some("SQUIRTLE".into()),
        }
        .normalized();
        assert_eq!(patch.name.as_deref(), Some("squirtle"));
        assert_eq!(patch.no, Some(7));
    }
}
