use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DispatchOptions {
    /// Ceiling on nested decapsulations for a single packet. Packets that
    /// exceed it are treated as corrupt.
    pub max_decap_depth: u8,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self { max_decap_depth: 8 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_depth_ceiling() {
        assert_eq!(DispatchOptions::default().max_decap_depth, 8);
    }

    #[test]
    fn test_deserialize_from_config_fragment() {
        let opts: DispatchOptions = serde_json::from_str(r#"{"max_decap_depth": 3}"#).unwrap();
        assert_eq!(opts.max_decap_depth, 3);
    }
}
