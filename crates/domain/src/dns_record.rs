use std::fmt;

/// Codec-independent projection of one answer record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsAnswer {
    pub name: String,
    pub ttl: u32,
    pub class: String,
    pub record_type: String,
    pub rdata: String,
}

impl fmt::Display for DnsAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.name, self.ttl, self.class, self.record_type, self.rdata
        )
    }
}

/// Answer section of a response, in wire order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    records: Vec<DnsAnswer>,
}

impl AnswerSet {
    pub fn new(records: Vec<DnsAnswer>) -> Self {
        Self { records }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DnsAnswer> {
        self.records.iter()
    }

    pub fn records(&self) -> &[DnsAnswer] {
        &self.records
    }
}

impl From<Vec<DnsAnswer>> for AnswerSet {
    fn from(records: Vec<DnsAnswer>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a AnswerSet {
    type Item = &'a DnsAnswer;
    type IntoIter = std::slice::Iter<'a, DnsAnswer>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
