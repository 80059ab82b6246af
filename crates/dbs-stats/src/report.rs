use super::*;
use std::fmt::Display;
use std::fmt::Formatter;

/// A rendered-on-demand relation size report.
///
/// ```text
/// DATABASE: mydb
///  * public.users - 16 kB
///
/// Response from: host1
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub database: String,
    pub relations: Vec<RelationSize>,
    pub host: String,
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "DATABASE: {}", self.database)?;
        for relation in self.relations.iter() {
            writeln!(f, " * {} - {}", relation.name, relation.size)?;
        }
        writeln!(f)?;
        writeln!(f, "Response from: {}", self.host)
    }
}
