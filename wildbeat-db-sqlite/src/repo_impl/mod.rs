use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use wildbeat_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

define_sql_function! {
    fn last_insert_rowid() -> BigInt;
}

fn last_inserted_id(conn: &mut SqliteConnection) -> Result<Id> {
    diesel::select(last_insert_rowid())
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)
}

// Updates and deletes by id must hit exactly one row
fn expect_single_row(count: usize) -> Result<()> {
    match count {
        0 => Err(repo::Error::NotFound),
        1 => Ok(()),
        _ => Err(anyhow::anyhow!("{count} rows affected instead of 1").into()),
    }
}

// Implements a repository for all connection types by delegating
// to the free functions of the same name. Writing through a
// read-only connection is a programming error.
macro_rules! impl_repo {
    (
        $repo:ident {
            read {
                $( fn $r_fn:ident(&self $(, $r_arg:ident: $r_ty:ty)*) -> $r_ret:ty; )*
            }
            write {
                $( fn $w_fn:ident(&self $(, $w_arg:ident: $w_ty:ty)*) -> $w_ret:ty; )*
            }
        }
    ) => {
        impl<'a> $repo for DbReadOnly<'a> {
            $(
                fn $r_fn(&self $(, $r_arg: $r_ty)*) -> $r_ret {
                    $r_fn(&mut self.conn.borrow_mut() $(, $r_arg)*)
                }
            )*
            $(
                fn $w_fn(&self $(, _: $w_ty)*) -> $w_ret {
                    unreachable!();
                }
            )*
        }

        impl<'a> $repo for DbReadWrite<'a> {
            $(
                fn $r_fn(&self $(, $r_arg: $r_ty)*) -> $r_ret {
                    $r_fn(&mut self.conn.borrow_mut() $(, $r_arg)*)
                }
            )*
            $(
                fn $w_fn(&self $(, $w_arg: $w_ty)*) -> $w_ret {
                    $w_fn(&mut self.conn.borrow_mut() $(, $w_arg)*)
                }
            )*
        }

        impl<'a> $repo for DbConnection<'a> {
            $(
                fn $r_fn(&self $(, $r_arg: $r_ty)*) -> $r_ret {
                    $r_fn(&mut self.conn.borrow_mut() $(, $r_arg)*)
                }
            )*
            $(
                fn $w_fn(&self $(, $w_arg: $w_ty)*) -> $w_ret {
                    $w_fn(&mut self.conn.borrow_mut() $(, $w_arg)*)
                }
            )*
        }
    };
}

mod booking;
mod donation;
mod donation_type;
mod gallery;
mod review;
mod session;
mod support;
mod tour;
mod user;
