//! In-memory user directory behind the sortable `/v1/users` listing.

use std::cmp::Ordering;

use colsort_core::{ConfigError, SortColumns, SortResolver, SortSpec, SortableColumn};
use serde::Serialize;

pub const USERS_VIEW: &str = "users";

/// Sortable columns of the user listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserColumn {
    Login,
    Name,
    CreatedOn,
}

impl UserColumn {
    pub fn all() -> &'static [UserColumn] {
        &[UserColumn::Login, UserColumn::Name, UserColumn::CreatedOn]
    }

    pub fn key(&self) -> &'static str {
        match self {
            UserColumn::Login => "login",
            UserColumn::Name => "name",
            UserColumn::CreatedOn => "created_on",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|column| column.key() == key)
    }

    fn config(&self) -> SortableColumn {
        match self {
            UserColumn::Login => SortableColumn::new(self.key(), "Login").with_order_expr("users.login"),
            UserColumn::Name => SortableColumn::new(self.key(), "Name")
                .with_order_expr("users.lastname, users.firstname"),
            UserColumn::CreatedOn => SortableColumn::new(self.key(), "Created")
                .descending()
                .with_order_expr("users.created_on"),
        }
    }

    fn compare(&self, a: &UserRow, b: &UserRow) -> Ordering {
        match self {
            UserColumn::Login => a.login.cmp(&b.login),
            UserColumn::Name => (&a.lastname, &a.firstname).cmp(&(&b.lastname, &b.firstname)),
            UserColumn::CreatedOn => a.created_on.cmp(&b.created_on),
        }
    }
}

pub fn user_columns() -> Result<SortColumns, ConfigError> {
    SortColumns::new(UserColumn::all().iter().map(UserColumn::config))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRow {
    pub id: u32,
    pub login: String,
    pub firstname: String,
    pub lastname: String,
    /// ISO-8601 date.
    pub created_on: String,
}

impl UserRow {
    fn new(id: u32, login: &str, firstname: &str, lastname: &str, created_on: &str) -> Self {
        Self {
            id,
            login: login.to_string(),
            firstname: firstname.to_string(),
            lastname: lastname.to_string(),
            created_on: created_on.to_string(),
        }
    }
}

/// Rows plus the resolver that owns their column whitelist.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    resolver: SortResolver,
    rows: Vec<UserRow>,
}

impl UserDirectory {
    pub fn new(rows: Vec<UserRow>) -> Result<Self, ConfigError> {
        Ok(Self {
            resolver: SortResolver::new(USERS_VIEW, user_columns()?),
            rows,
        })
    }

    pub fn seeded() -> Result<Self, ConfigError> {
        Self::new(seed_rows())
    }

    pub fn resolver(&self) -> &SortResolver {
        &self.resolver
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows ordered by `spec`, ties broken by id.
    pub fn sorted(&self, spec: &SortSpec) -> Vec<UserRow> {
        let mut rows = self.rows.clone();
        let column = UserColumn::from_key(&spec.column_key);
        let ascending = spec.direction.is_ascending();
        rows.sort_by(|a, b| {
            let ordering = column.map_or(Ordering::Equal, |column| column.compare(a, b));
            let ordering = if ascending { ordering } else { ordering.reverse() };
            ordering.then(a.id.cmp(&b.id))
        });
        rows
    }
}

fn seed_rows() -> Vec<UserRow> {
    vec![
        UserRow::new(1, "admin", "Redmine", "Admin", "2007-03-12"),
        UserRow::new(2, "jsmith", "John", "Smith", "2008-07-01"),
        UserRow::new(3, "dlopper", "Dave", "Lopper", "2006-11-20"),
        UserRow::new(4, "rhill", "Robert", "Hill", "2010-02-14"),
        UserRow::new(5, "mdoe", "Mary", "Doe", "2009-09-30"),
        UserRow::new(6, "alemaire", "Anne", "Lemaire", "2011-05-05"),
        UserRow::new(7, "bkent", "Bruce", "Kent", "2008-07-01"),
        UserRow::new(8, "cwong", "Chen", "Wong", "2012-01-18"),
    ]
}

#[cfg(test)]
mod tests {
    use colsort_core::SortDirection;

    use super::*;

    fn logins(rows: &[UserRow]) -> Vec<&str> {
        rows.iter().map(|row| row.login.as_str()).collect()
    }

    #[test]
    fn every_column_key_round_trips() {
        for column in UserColumn::all() {
            assert_eq!(UserColumn::from_key(column.key()), Some(*column));
        }
        assert_eq!(UserColumn::from_key("password"), None);
    }

    #[test]
    fn sorts_by_login_both_ways() {
        let directory = UserDirectory::seeded().unwrap();
        let asc = directory.sorted(&SortSpec::new("login", SortDirection::Ascending));
        assert_eq!(
            logins(&asc),
            ["admin", "alemaire", "bkent", "cwong", "dlopper", "jsmith", "mdoe", "rhill"]
        );

        let desc = directory.sorted(&SortSpec::new("login", SortDirection::Descending));
        let mut reversed = logins(&asc);
        reversed.reverse();
        assert_eq!(logins(&desc), reversed);
    }

    #[test]
    fn equal_dates_break_ties_by_id() {
        let directory = UserDirectory::seeded().unwrap();
        let rows = directory.sorted(&SortSpec::new("created_on", SortDirection::Descending));
        let same_day: Vec<u32> = rows
            .iter()
            .filter(|row| row.created_on == "2008-07-01")
            .map(|row| row.id)
            .collect();
        assert_eq!(same_day, [2u32, 7]);
        assert_eq!(rows[0].login, "cwong");
    }

    #[test]
    fn name_sorts_by_last_then_first() {
        let directory = UserDirectory::seeded().unwrap();
        let rows = directory.sorted(&SortSpec::new("name", SortDirection::Ascending));
        assert_eq!(rows[0].lastname, "Admin");
        assert_eq!(rows[1].lastname, "Doe");
    }
}
