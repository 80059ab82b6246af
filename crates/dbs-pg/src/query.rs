/// Relations outside `pg_catalog` and `information_schema`, largest first.
///
/// Size is the relation's own storage (`pg_relation_size`), excluding TOAST
/// and indexes. Takes the row limit as `$1` (BIGINT).
pub const RELATIONS: &str = "
    SELECT
        nspname || '.' || relname,
        pg_size_pretty(pg_relation_size(C.oid))
    FROM pg_class C
    LEFT JOIN pg_namespace N ON (N.oid = C.relnamespace)
    WHERE nspname NOT IN ('pg_catalog', 'information_schema')
    ORDER BY pg_relation_size(C.oid) DESC
    LIMIT $1
";
