use std::fmt;
use std::ops::Index;

use crate::filter::Filter;

/// An ordered sequence of filters, comma-joined; insertion order is
/// execution order along the chain.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FilterChain {
    filters: Vec<Filter>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_filters(filters: impl IntoIterator<Item = Filter>) -> Self {
        Self {
            filters: filters.into_iter().collect(),
        }
    }

    pub fn append(&mut self, filter: Filter) {
        self.filters.push(filter);
    }

    pub fn get(&self, index: usize) -> Option<&Filter> {
        self.filters.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Filter> {
        self.filters.iter()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Index<usize> for FilterChain {
    type Output = Filter;

    fn index(&self, index: usize) -> &Filter {
        &self.filters[index]
    }
}

impl<'a> IntoIterator for &'a FilterChain {
    type Item = &'a Filter;
    type IntoIter = std::slice::Iter<'a, Filter>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.iter()
    }
}

impl fmt::Display for FilterChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, filter) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{filter}")?;
        }
        Ok(())
    }
}

/// Accepted shapes for one [`FilterGraph::append`] call: a fresh empty chain,
/// a pre-built chain appended as-is, or filters wrapped into a new chain in
/// the given order.
#[derive(Clone, Debug)]
pub enum ChainSpec {
    Empty,
    Chain(FilterChain),
    Filters(Vec<Filter>),
}

impl From<()> for ChainSpec {
    fn from(_: ()) -> Self {
        Self::Empty
    }
}

impl From<FilterChain> for ChainSpec {
    fn from(chain: FilterChain) -> Self {
        Self::Chain(chain)
    }
}

/// An absent explicit chain appends a fresh empty one.
impl From<Option<FilterChain>> for ChainSpec {
    fn from(chain: Option<FilterChain>) -> Self {
        match chain {
            Some(chain) => Self::Chain(chain),
            None => Self::Empty,
        }
    }
}

impl From<Filter> for ChainSpec {
    fn from(filter: Filter) -> Self {
        Self::Filters(vec![filter])
    }
}

impl From<Vec<Filter>> for ChainSpec {
    fn from(filters: Vec<Filter>) -> Self {
        Self::Filters(filters)
    }
}

impl<const N: usize> From<[Filter; N]> for ChainSpec {
    fn from(filters: [Filter; N]) -> Self {
        Self::Filters(filters.into())
    }
}

/// An ordered sequence of chains, semicolon-joined; the top-level artifact.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FilterGraph {
    chains: Vec<FilterChain>,
}

impl FilterGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chain in one of the [`ChainSpec`] shapes and return it for
    /// further building.
    pub fn append(&mut self, chain: impl Into<ChainSpec>) -> &mut FilterChain {
        let chain = match chain.into() {
            ChainSpec::Empty => FilterChain::new(),
            ChainSpec::Chain(chain) => chain,
            ChainSpec::Filters(filters) => FilterChain::from_filters(filters),
        };
        self.chains.push(chain);
        let last = self.chains.len() - 1;
        &mut self.chains[last]
    }

    /// Wrap a single filter into a freshly appended chain.
    pub fn append_filter(&mut self, filter: Filter) -> &mut FilterChain {
        self.append(filter)
    }

    pub fn get(&self, index: usize) -> Option<&FilterChain> {
        self.chains.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FilterChain> {
        self.chains.iter()
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// Render the whole graph to filtergraph text.
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Index<usize> for FilterGraph {
    type Output = FilterChain;

    fn index(&self, index: usize) -> &FilterChain {
        &self.chains[index]
    }
}

impl<'a> IntoIterator for &'a FilterGraph {
    type Item = &'a FilterChain;
    type IntoIter = std::slice::Iter<'a, FilterChain>;

    fn into_iter(self) -> Self::IntoIter {
        self.chains.iter()
    }
}

impl fmt::Display for FilterGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chain) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{chain}")?;
        }
        Ok(())
    }
}
