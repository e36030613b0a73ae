use crate::error::{ProcessingError, Result};
use crate::models::{column_names, require_column};
use crate::utils::constants::{LEFT_SUFFIX, RIGHT_SUFFIX};
use polars::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    /// Keep every left row, null-filling the right columns
    Left,
    /// Keep only rows with a match on both sides
    Inner,
}

impl JoinKind {
    fn join_type(self) -> JoinType {
        match self {
            JoinKind::Left => JoinType::Left,
            JoinKind::Inner => JoinType::Inner,
        }
    }
}

/// Join `right` onto `left` on the `on` columns.
///
/// Rows come out in left order and the key columns appear once. Non-key
/// columns present on both sides are suffixed `_x` (left) and `_y` (right).
/// Integer and float keys compare by value, so `1234` matches `1234.0`.
/// Null keys never match.
pub fn join(left: &DataFrame, right: &DataFrame, on: &[&str], kind: JoinKind) -> Result<DataFrame> {
    for key in on {
        require_column(left, key, "left side of join")?;
        require_column(right, key, "right side of join")?;
    }

    let mut left = left.clone();
    let mut right = right.clone();
    align_key_types(&mut left, &mut right, on)?;
    suffix_overlapping(&mut left, &mut right, on)?;

    let keys: Vec<Expr> = on.iter().map(|key| col(*key)).collect();
    let mut args = JoinArgs::new(kind.join_type());
    args.maintain_order = MaintainOrderJoin::Left;

    let joined = left
        .lazy()
        .join(right.lazy(), keys.clone(), keys, args)
        .collect()?;
    Ok(joined)
}

/// Cast key columns so both sides share a type. Mixed integer/float keys
/// become floats; an all-null side takes the other side's type.
fn align_key_types(left: &mut DataFrame, right: &mut DataFrame, on: &[&str]) -> Result<()> {
    for key in on {
        let left_type = left.column(key)?.dtype().clone();
        let right_type = right.column(key)?.dtype().clone();
        if left_type == right_type {
            continue;
        }

        let target = if is_number(&left_type) && is_number(&right_type) {
            DataType::Float64
        } else if all_null(right, key)? {
            left_type
        } else if all_null(left, key)? {
            right_type
        } else {
            return Err(ProcessingError::KeyTypeMismatch {
                column: key.to_string(),
                left: left_type.to_string(),
                right: right_type.to_string(),
            });
        };

        cast_column(left, key, &target)?;
        cast_column(right, key, &target)?;
    }
    Ok(())
}

fn suffix_overlapping(left: &mut DataFrame, right: &mut DataFrame, on: &[&str]) -> Result<()> {
    let right_names = column_names(right);
    let overlapping: Vec<String> = column_names(left)
        .into_iter()
        .filter(|name| !on.contains(&name.as_str()) && right_names.contains(name))
        .collect();

    for name in &overlapping {
        left.rename(name, format!("{}{}", name, LEFT_SUFFIX).into())?;
        right.rename(name, format!("{}{}", name, RIGHT_SUFFIX).into())?;
    }
    Ok(())
}

fn is_number(dtype: &DataType) -> bool {
    dtype.is_integer() || dtype.is_float()
}

fn all_null(frame: &DataFrame, column: &str) -> Result<bool> {
    Ok(frame.column(column)?.null_count() == frame.height())
}

fn cast_column(frame: &mut DataFrame, column: &str, dtype: &DataType) -> Result<()> {
    let cast = frame.column(column)?.cast(dtype)?;
    frame.with_column(cast)?;
    Ok(())
}
