use indexmap::IndexMap;

/// Leading slice of a map, plus how many entries it was cut from.
pub struct Leading<'a, V> {
    pub entries: Vec<(&'a str, &'a V)>,
    pub total: usize,
}

impl<V> Leading<'_, V> {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn shown(&self) -> usize {
        self.entries.len()
    }
}

/// First `cap` entries in map order.
///
/// Positional only: no sorting by size, count or path.
pub fn take_leading<V>(map: &IndexMap<String, V>, cap: usize) -> Leading<'_, V> {
    Leading {
        entries: map.iter().map(|(k, v)| (k.as_str(), v)).take(cap).collect(),
        total: map.len(),
    }
}

/// Aggregated export names.
pub struct ExportOverview<'a> {
    pub names: Vec<&'a str>,
    /// True when the total is small enough to list every name.
    pub listed: bool,
}

impl ExportOverview<'_> {
    pub fn total(&self) -> usize {
        self.names.len()
    }

    pub fn listed_count(&self) -> usize {
        if self.listed {
            self.names.len()
        } else {
            0
        }
    }
}

/// Collect export names in order and decide whether they fit the listing cap.
pub fn export_overview<'a>(
    names: impl Iterator<Item = &'a str>,
    max_listed: usize,
) -> ExportOverview<'a> {
    let names: Vec<&str> = names.collect();
    let listed = names.len() <= max_listed;
    ExportOverview { names, listed }
}
