//! The fixed set of variable datatypes recognized in declarations.

use std::fmt;

use serde::Deserialize;

/// Datatype of a declared variable.
///
/// The set is closed: a declaration whose leading keyword is not one of
/// these is not a declaration at all and is skipped by the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    Int,
    Real,
    Vector,
    RowVector,
    Matrix,
    Ordered,
    PositiveOrdered,
    Simplex,
    UnitVector,
    CovMatrix,
    CorrMatrix,
    CholeskyFactorCov,
    CholeskyFactorCorr,
}

impl DataType {
    /// Parses a datatype keyword, returning `None` for anything outside the
    /// fixed set.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "int" => DataType::Int,
            "real" => DataType::Real,
            "vector" => DataType::Vector,
            "row_vector" => DataType::RowVector,
            "matrix" => DataType::Matrix,
            "ordered" => DataType::Ordered,
            "positive_ordered" => DataType::PositiveOrdered,
            "simplex" => DataType::Simplex,
            "unit_vector" => DataType::UnitVector,
            "cov_matrix" => DataType::CovMatrix,
            "corr_matrix" => DataType::CorrMatrix,
            "cholesky_factor_cov" => DataType::CholeskyFactorCov,
            "cholesky_factor_corr" => DataType::CholeskyFactorCorr,
            _ => return None,
        })
    }

    /// Returns the source keyword for this datatype.
    pub fn keyword(&self) -> &'static str {
        match self {
            DataType::Int => "int",
            DataType::Real => "real",
            DataType::Vector => "vector",
            DataType::RowVector => "row_vector",
            DataType::Matrix => "matrix",
            DataType::Ordered => "ordered",
            DataType::PositiveOrdered => "positive_ordered",
            DataType::Simplex => "simplex",
            DataType::UnitVector => "unit_vector",
            DataType::CovMatrix => "cov_matrix",
            DataType::CorrMatrix => "corr_matrix",
            DataType::CholeskyFactorCov => "cholesky_factor_cov",
            DataType::CholeskyFactorCorr => "cholesky_factor_corr",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_round_trip() {
        let keywords = [
            "int",
            "real",
            "vector",
            "row_vector",
            "matrix",
            "ordered",
            "positive_ordered",
            "simplex",
            "unit_vector",
            "cov_matrix",
            "corr_matrix",
            "cholesky_factor_cov",
            "cholesky_factor_corr",
        ];
        for keyword in keywords {
            let datatype = DataType::from_keyword(keyword)
                .unwrap_or_else(|| panic!("`{keyword}` should parse"));
            assert_eq!(datatype.keyword(), keyword);
        }
    }

    #[test]
    fn test_unknown_keywords_rejected() {
        assert_eq!(DataType::from_keyword("complex"), None);
        assert_eq!(DataType::from_keyword("reals"), None);
        assert_eq!(DataType::from_keyword(""), None);
        // Prefixes of valid keywords are not valid keywords.
        assert_eq!(DataType::from_keyword("row"), None);
    }
}
