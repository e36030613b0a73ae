use crate::error::Result;
use crate::utils::constants::{D_ALTITUDE, D_LONGITUDE, DESTINATION, O_ALTITUDE, O_LONGITUDE, ORIGIN};
use polars::prelude::*;

/// Airport code to (altitude, longitude) lookup, labelled for the origin side.
///
/// Codes are not required to be unique; a repeated code yields one joined
/// row per entry.
#[derive(Debug, Clone)]
pub struct CoordinateTable {
    frame: DataFrame,
}

impl CoordinateTable {
    /// Wrap a three column frame, labelling it `Origin, o_altitude, o_longitude`
    pub fn from_frame(mut frame: DataFrame) -> Result<Self> {
        frame.set_column_names([ORIGIN, O_ALTITUDE, O_LONGITUDE])?;
        Ok(Self { frame })
    }

    pub fn len(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    pub fn contains(&self, code: &str) -> bool {
        self.frame
            .column(ORIGIN)
            .ok()
            .and_then(|column| column.as_materialized_series().str().ok())
            .is_some_and(|codes| codes.into_iter().any(|value| value == Some(code)))
    }

    pub fn as_origin(&self) -> &DataFrame {
        &self.frame
    }

    /// Copy relabelled as `Destination, d_altitude, d_longitude`
    pub fn as_destination(&self) -> Result<DataFrame> {
        let mut frame = self.frame.clone();
        frame.set_column_names([DESTINATION, D_ALTITUDE, D_LONGITUDE])?;
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::column_names;

    #[test]
    fn test_destination_relabel() -> Result<()> {
        let frame = DataFrame::new(vec![
            Series::new("GKA".into(), &["BER"]).into_column(),
            Series::new("lat".into(), &[52.38]).into_column(),
            Series::new("lon".into(), &[13.52]).into_column(),
        ])?;
        let coordinates = CoordinateTable::from_frame(frame)?;

        assert_eq!(column_names(coordinates.as_origin()), vec![ORIGIN, O_ALTITUDE, O_LONGITUDE]);
        assert_eq!(
            column_names(&coordinates.as_destination()?),
            vec![DESTINATION, D_ALTITUDE, D_LONGITUDE]
        );
        assert!(coordinates.contains("BER"));
        assert!(!coordinates.contains("CDG"));

        Ok(())
    }

    #[test]
    fn test_wrong_width_is_an_error() -> Result<()> {
        let frame = DataFrame::new(vec![Series::new("GKA".into(), &["BER"]).into_column()])?;
        assert!(CoordinateTable::from_frame(frame).is_err());
        Ok(())
    }
}
