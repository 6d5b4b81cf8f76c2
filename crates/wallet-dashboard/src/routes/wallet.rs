//! `/api/wallet/generate` and `/api/wallet/newaddress`, the two endpoints
//! backed by `wallet-core`.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;
use crate::state::AppState;

fn default_path() -> String {
    wallet_core::DEFAULT_DERIVATION_PATH.to_string()
}

fn default_entropy_bits() -> u32 {
    128
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub passphrase: String,
    #[serde(default = "default_path")]
    pub path: String,
    #[serde(default = "default_entropy_bits")]
    pub entropy_bits: u32,
}

impl Default for GenerateRequest {
    fn default() -> Self {
        GenerateRequest {
            passphrase: String::new(),
            path: default_path(),
            entropy_bits: default_entropy_bits(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DerivationLevelDto {
    pub path: String,
    pub xprv: String,
    pub xpub: String,
}

impl From<&wallet_core::DerivationLevel> for DerivationLevelDto {
    fn from(level: &wallet_core::DerivationLevel) -> Self {
        DerivationLevelDto {
            path: level.path.clone(),
            xprv: level.xprv.clone(),
            xpub: level.xpub.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub entropy_hex: String,
    pub entropy_bits: u32,
    pub mnemonic: String,
    pub seed_hex: String,
    pub master_xprv: String,
    pub master_xpub: String,
    pub derivation_path: String,
    pub derivation_chain: Vec<DerivationLevelDto>,
    pub private_key_wif: String,
    pub public_key_hex: String,
    pub address: String,
}

impl From<wallet_core::HdWallet> for GenerateResponse {
    fn from(wallet: wallet_core::HdWallet) -> Self {
        GenerateResponse {
            entropy_hex: wallet.entropy_hex,
            entropy_bits: wallet.entropy_bits,
            mnemonic: wallet.mnemonic,
            seed_hex: wallet.seed_hex,
            master_xprv: wallet.master_xprv,
            master_xpub: wallet.master_xpub,
            derivation_path: wallet.derivation_path,
            derivation_chain: wallet.derivation_chain.iter().map(Into::into).collect(),
            private_key_wif: wallet.private_key_wif,
            public_key_hex: wallet.public_key_hex,
            address: wallet.address,
        }
    }
}

/// `POST /api/wallet/generate`: draws fresh entropy and synthesizes a
/// complete HD wallet chain.
pub async fn generate(
    body: Option<Json<GenerateRequest>>,
) -> Result<Json<GenerateResponse>, AppError> {
    let request = body.map(|Json(r)| r).unwrap_or_default();
    let wallet = wallet_core::generate(
        request.entropy_bits,
        &request.passphrase,
        &request.path,
        wallet_core::DEFAULT_HRP,
    )?;
    Ok(Json(wallet.into()))
}

#[derive(Debug, Serialize)]
pub struct NewAddressResponse {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pubkey: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privkey: Option<String>,
}

/// `GET /api/wallet/newaddress`: asks the daemon for a fresh address, then
/// re-derives its WIF private key from the cached master `tprv` when the
/// daemon reports an `hdkeypath`.
pub async fn newaddress(State(state): State<AppState>) -> Result<Json<NewAddressResponse>, AppError> {
    let address = state
        .rpc()
        .call("getnewaddress", Vec::new())
        .await?
        .as_str()
        .ok_or_else(|| AppError::Upstream("getnewaddress returned no address".into()))?
        .to_string();

    let info = state
        .rpc()
        .call("getaddressinfo", vec![Value::String(address.clone())])
        .await
        .unwrap_or(Value::Null);

    let pubkey = info.get("pubkey").and_then(Value::as_str).map(str::to_string);
    let hdkeypath = info.get("hdkeypath").and_then(Value::as_str);

    let privkey = match hdkeypath {
        Some(path) => match state.descriptors().master_tprv(state.rpc()).await {
            Ok(tprv) => wallet_core::derive_wif_from_xprv(&tprv, path).ok(),
            Err(_) => None,
        },
        None => None,
    };

    Ok(Json(NewAddressResponse { address, pubkey, privkey }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn generate_with_defaults_produces_testnet_address() {
        let response = generate(None).await.unwrap().0;
        assert_eq!(response.entropy_bits, 128);
        assert!(response.address.starts_with("crnrt1q"));
        assert!(response.private_key_wif.starts_with('c'));
    }

    #[tokio::test]
    async fn generate_rejects_bad_entropy_bits() {
        let request = GenerateRequest { entropy_bits: 200, ..Default::default() };
        let err = generate(Some(Json(request))).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidParameter(_)));
    }

    #[tokio::test]
    async fn generate_rejects_malformed_path() {
        let request = GenerateRequest { path: "m/84h/1x/0h".to_string(), ..Default::default() };
        let err = generate(Some(Json(request))).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidPath(_)));
    }
}
