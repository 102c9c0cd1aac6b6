// src/infrastructure/repositories/sql.rs
use sqlx::{Encode, Postgres, QueryBuilder, Type};

/// Appends `WHERE`/`AND` conditions to a query as filter criteria are visited.
pub(super) struct Conditions<'q, 'a> {
    builder: &'q mut QueryBuilder<'a, Postgres>,
    has_where: bool,
}

impl<'q, 'a> Conditions<'q, 'a> {
    pub(super) fn new(builder: &'q mut QueryBuilder<'a, Postgres>) -> Self {
        Self {
            builder,
            has_where: false,
        }
    }

    fn next(&mut self) -> &mut QueryBuilder<'a, Postgres> {
        if self.has_where {
            self.builder.push(" AND ");
        } else {
            self.builder.push(" WHERE ");
            self.has_where = true;
        }
        &mut *self.builder
    }

    /// `column = ANY($n)`; skipped when `values` is empty.
    pub(super) fn any_of<T>(&mut self, column: &str, values: Vec<T>)
    where
        Vec<T>: 'a + Encode<'a, Postgres> + Type<Postgres> + Send,
    {
        if values.is_empty() {
            return;
        }
        let builder = self.next();
        builder.push(column);
        builder.push(" = ANY(");
        builder.push_bind(values);
        builder.push(")");
    }

    /// `column <op> $n` for a single bound value.
    pub(super) fn compare<T>(&mut self, column: &str, op: &str, value: T)
    where
        T: 'a + Encode<'a, Postgres> + Type<Postgres> + Send,
    {
        let builder = self.next();
        builder.push(column);
        builder.push(" ");
        builder.push(op);
        builder.push(" ");
        builder.push_bind(value);
    }

    /// Case-insensitive substring search over `columns`, OR-ed together.
    pub(super) fn contains_any(&mut self, columns: &[&str], query: &str) {
        let pattern = like_pattern(query);
        let builder = self.next();
        builder.push("(");
        for (idx, column) in columns.iter().enumerate() {
            if idx > 0 {
                builder.push(" OR ");
            }
            builder.push(*column);
            builder.push(" ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" ESCAPE '\\'");
        }
        builder.push(")");
    }

    pub(super) fn never(&mut self) {
        self.next().push("FALSE");
    }
}

/// `%query%` with LIKE metacharacters escaped so the query matches literally.
pub(super) fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for ch in query.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
