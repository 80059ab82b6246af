/// A relation's qualified name and its `pg_size_pretty` size, e.g.
/// `("public.users", "16 kB")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationSize {
    pub name: String,
    pub size: String,
}

impl From<(&str, &str)> for RelationSize {
    fn from((name, size): (&str, &str)) -> Self {
        Self {
            name: name.to_string(),
            size: size.to_string(),
        }
    }
}

impl TryFrom<&tokio_postgres::Row> for RelationSize {
    type Error = crate::PgErr;
    fn try_from(row: &tokio_postgres::Row) -> Result<Self, Self::Error> {
        Ok(Self {
            name: row.try_get(0)?,
            size: row.try_get(1)?,
        })
    }
}
