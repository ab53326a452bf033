use anyhow::{Result, anyhow};

pub fn serialize<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
    bincode::serialize(value).map_err(|e| anyhow!("Serialization failed: {}", e))
}

pub fn deserialize<T: serde::de::DeserializeOwned>(data: &[u8]) -> Result<T> {
    bincode::deserialize(data).map_err(|e| anyhow!("Deserialization failed: {}", e))
}

/// Encodes wire bytes the way `sendTransaction` expects them with
/// `encoding: "base64"`.
pub fn encode_base64(data: &[u8]) -> String {
    base64::encode(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::{hash::Hash, signature::Keypair, signer::Signer, system_instruction, transaction::Transaction};

    #[test]
    fn transaction_survives_wire_encoding() {
        let payer = Keypair::new();
        let ix = system_instruction::transfer(&payer.pubkey(), &Keypair::new().pubkey(), 42);
        let tx = Transaction::new_signed_with_payer(&[ix], Some(&payer.pubkey()), &[&payer], Hash::new_unique());

        let encoded = encode_base64(&serialize(&tx).unwrap());
        let decoded: Transaction = deserialize(&base64::decode(&encoded).unwrap()).unwrap();

        assert_eq!(decoded, tx);
        assert!(decoded.verify().is_ok());
    }

    #[test]
    fn rejects_garbage() {
        assert!(deserialize::<Transaction>(&[1, 2, 3]).is_err());
    }
}
