use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::engine::efficiency;
use crate::engine::{Complexity, Protocol};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolInfo {
    pub id: String,
    pub display_name: String,
    pub complexity: Complexity,
    pub base_efficiency: u8,
}

/// Static listing of supported protocols for UI dropdowns.
pub async fn list_protocols() -> Json<Vec<ProtocolInfo>> {
    let protocols = Protocol::ALL
        .iter()
        .map(|protocol| ProtocolInfo {
            id: protocol.as_str().to_string(),
            display_name: protocol.display_name().to_string(),
            complexity: protocol.complexity(),
            base_efficiency: efficiency::family_base(*protocol),
        })
        .collect();

    Json(protocols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lists_every_protocol() {
        let Json(protocols) = list_protocols().await;
        assert_eq!(protocols.len(), Protocol::ALL.len());
        assert!(protocols.iter().any(|p| p.id == "uniswap-v3"));
        assert!(protocols.iter().any(|p| p.id == "balancer-weighted"));
    }
}
