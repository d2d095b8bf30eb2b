//! Binary trie decoder for the fixed PKWARE prefix codes.

use std::sync::LazyLock;

use super::bits::BitReader;
use super::tables::{LENGTH_CODES, LITERAL_CODES, OFFSET_CODES};
use super::Interrupt;
use crate::error::ExplodeError;

pub static LITERALS: LazyLock<PrefixCodeTable> =
    LazyLock::new(|| PrefixCodeTable::from_codes("literal", LITERAL_CODES));

pub static LENGTHS: LazyLock<PrefixCodeTable> =
    LazyLock::new(|| PrefixCodeTable::from_codes("length", LENGTH_CODES));

pub static OFFSETS: LazyLock<PrefixCodeTable> =
    LazyLock::new(|| PrefixCodeTable::from_codes("offset", OFFSET_CODES));

const ROOT: usize = 0;

#[derive(Debug, Default, Clone)]
struct Node {
    /// Child index for a `0` bit and a `1` bit.
    children: [Option<usize>; 2],
    value: Option<u16>,
}

/// A prefix code stored as an array-backed binary trie.
///
/// A `0` bit descends to the left child and a `1` bit to the right one.
#[derive(Debug, Clone)]
pub struct PrefixCodeTable {
    name: &'static str,
    nodes: Vec<Node>,
}

impl PrefixCodeTable {
    /// Build a table from `(code, symbol)` pairs.
    ///
    /// # Panics
    ///
    /// Panics if a code contains anything other than `0`/`1`, or if two
    /// codes collide or one is a prefix of another.
    pub fn from_codes(name: &'static str, codes: &[(&str, u16)]) -> Self {
        let mut table = Self {
            name,
            nodes: vec![Node::default()],
        };
        for &(code, value) in codes {
            table.insert(code, value);
        }
        table
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    fn insert(&mut self, code: &str, value: u16) {
        let mut node = ROOT;
        for c in code.chars() {
            assert!(
                self.nodes[node].value.is_none(),
                "{} code {code} extends another code",
                self.name
            );
            let branch = match c {
                '0' => 0,
                '1' => 1,
                other => panic!("{} code {code} contains {other:?}", self.name),
            };
            node = match self.nodes[node].children[branch] {
                Some(child) => child,
                None => {
                    self.nodes.push(Node::default());
                    let child = self.nodes.len() - 1;
                    self.nodes[node].children[branch] = Some(child);
                    child
                }
            };
        }
        let leaf = &mut self.nodes[node];
        assert!(
            leaf.value.is_none() && leaf.children == [None, None],
            "{} code {code} is ambiguous",
            self.name
        );
        leaf.value = Some(value);
    }

    /// Decode one symbol, consuming its bits from `bits`.
    ///
    /// A partial descent is not resumable: on [`Interrupt::NeedMoreData`]
    /// the caller must rewind to a checkpoint taken before the symbol.
    pub fn read_symbol(&self, bits: &mut BitReader) -> Result<u16, Interrupt> {
        let mut node = &self.nodes[ROOT];
        loop {
            if let Some(value) = node.value {
                return Ok(value);
            }
            let branch = bits.read_bit()? as usize;
            node = match node.children[branch] {
                Some(child) => &self.nodes[child],
                None => return Err(ExplodeError::UnknownCode { table: self.name }.into()),
            };
        }
    }
}
