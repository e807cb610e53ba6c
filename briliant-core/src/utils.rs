use crate::{sha256::Hash, transactions::Transaction};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MerkleRoot(Hash);

impl MerkleRoot {
    pub fn calculate(transactions: &[Transaction]) -> MerkleRoot {
        let mut layer: Vec<Hash> = transactions.iter().map(Transaction::txid).collect();

        if layer.is_empty() {
            return MerkleRoot(Hash::zero());
        }

        while layer.len() > 1 {
            let mut new_layer = vec![];
            for pair in layer.chunks(2) {
                let left = pair[0];
                let right = pair.get(1).unwrap_or(&pair[0]);

                let mut concatenated = [0u8; 64];
                concatenated[..32].copy_from_slice(&left.to_le_bytes());
                concatenated[32..].copy_from_slice(&right.to_le_bytes());
                new_layer.push(Hash::double_sha256(&concatenated));
            }
            layer = new_layer;
        }

        MerkleRoot(layer[0])
    }

    pub fn hash(&self) -> Hash {
        self.0
    }
}

impl From<Hash> for MerkleRoot {
    fn from(hash: Hash) -> Self {
        MerkleRoot(hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::Script;
    use crate::transactions::TxOut;

    fn coinbase(tag: i64) -> Transaction {
        Transaction::new_coinbase(
            Script::new().push_script_num(tag),
            vec![TxOut {
                value: tag,
                script_pubkey: Script::new(),
            }],
        )
    }

    #[test]
    fn test_empty_block_has_zero_root() {
        assert_eq!(MerkleRoot::calculate(&[]).hash(), Hash::zero());
    }

    #[test]
    fn test_single_transaction_root_is_its_txid() {
        let tx = coinbase(1);
        assert_eq!(MerkleRoot::calculate(&[tx.clone()]).hash(), tx.txid());
    }

    #[test]
    fn test_odd_layer_duplicates_last_entry() {
        let (a, b, c) = (coinbase(1), coinbase(2), coinbase(3));
        let three = MerkleRoot::calculate(&[a.clone(), b.clone(), c.clone()]);
        let four = MerkleRoot::calculate(&[a, b, c.clone(), c]);
        assert_eq!(three, four);
    }
}
