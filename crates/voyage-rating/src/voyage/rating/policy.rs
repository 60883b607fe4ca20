use super::super::domain::Grade;

/// Grade rule shared by every variant.
pub(crate) fn decide_grade(
    voyage_profit_factor: i64,
    voyage_risk: i64,
    captain_history_risk: i64,
) -> Grade {
    if voyage_profit_factor * 3 > voyage_risk + captain_history_risk * 2 {
        Grade::A
    } else {
        Grade::B
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_inequality_separates_a_from_b() {
        assert_eq!(decide_grade(3, 1, 1), Grade::A);
        assert_eq!(decide_grade(3, 5, 2), Grade::B);
        assert_eq!(decide_grade(3, 5, 5), Grade::B);
    }
}
