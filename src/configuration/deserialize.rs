pub mod outcome {
    use crate::tree::Outcome;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Outcome, D::Error>
    where
        D: Deserializer<'de>,
    {
        match String::deserialize(deserializer) {
            Ok(v) => v.parse::<Outcome>().map_err(|err| D::Error::custom(err.to_string())),
            Err(err) => Err(err),
        }
    }
}

pub mod node_kind {
    use crate::tree::NodeKind;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NodeKind, D::Error>
    where
        D: Deserializer<'de>,
    {
        match String::deserialize(deserializer) {
            Ok(v) => v.parse::<NodeKind>().map_err(|err| D::Error::custom(err.to_string())),
            Err(err) => Err(err),
        }
    }
}
