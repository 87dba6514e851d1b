use crate::filter::ast::DayFilter;
use crate::filter::FilterParseError;
use crate::time::{parse_date, parse_month};

pub fn parse_day_filter(input: &str) -> Result<DayFilter, FilterParseError> {
    let mut terms = Vec::new();

    for token in input.split_whitespace() {
        if let Some(raw) = token.strip_prefix("date:") {
            terms.push(DayFilter::On(date_value("date", raw)?));
        } else if let Some(raw) = token.strip_prefix("from:") {
            terms.push(DayFilter::From(date_value("from", raw)?));
        } else if let Some(raw) = token.strip_prefix("to:") {
            terms.push(DayFilter::To(date_value("to", raw)?));
        } else if let Some(raw) = token.strip_prefix("month:") {
            if raw.is_empty() {
                return Err(FilterParseError::EmptyValue("month".to_string()));
            }
            let (year, month) =
                parse_month(raw).map_err(|_| FilterParseError::InvalidMonth(raw.to_string()))?;
            terms.push(DayFilter::Month { year, month });
        } else if let Some(raw) = token.strip_prefix("weight<=") {
            terms.push(DayFilter::WeightAtMost(weight_value(raw)?));
        } else if let Some(raw) = token.strip_prefix("weight>=") {
            terms.push(DayFilter::WeightAtLeast(weight_value(raw)?));
        } else {
            return Err(FilterParseError::UnknownTerm(token.to_string()));
        }
    }

    Ok(DayFilter::And(terms))
}

fn date_value(key: &str, raw: &str) -> Result<chrono::NaiveDate, FilterParseError> {
    if raw.is_empty() {
        return Err(FilterParseError::EmptyValue(key.to_string()));
    }
    parse_date(raw).map_err(|_| FilterParseError::InvalidDate(raw.to_string()))
}

fn weight_value(raw: &str) -> Result<u32, FilterParseError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FilterParseError::InvalidWeight(raw.to_string()));
    }
    raw.parse()
        .map_err(|_| FilterParseError::InvalidWeight(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::parse_day_filter;
    use crate::filter::ast::DayFilter;
    use crate::filter::FilterParseError;
    use chrono::NaiveDate;

    #[test]
    fn parse_range_and_weight() {
        let filter = parse_day_filter("from:2024-01-01 to:2024-01-31 weight<=70").unwrap();
        assert_eq!(
            filter,
            DayFilter::And(vec![
                DayFilter::From(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
                DayFilter::To(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()),
                DayFilter::WeightAtMost(70),
            ])
        );
    }

    #[test]
    fn parse_month_term() {
        let filter = parse_day_filter("month:2024-02").unwrap();
        assert_eq!(
            filter,
            DayFilter::And(vec![DayFilter::Month {
                year: 2024,
                month: 2
            }])
        );
    }

    #[test]
    fn blank_input_matches_everything() {
        assert!(parse_day_filter("   ").unwrap().is_all());
    }

    #[test]
    fn errors_are_specific() {
        assert_eq!(
            parse_day_filter("date:").unwrap_err(),
            FilterParseError::EmptyValue("date".to_string())
        );
        assert_eq!(
            parse_day_filter("from:yesterday").unwrap_err(),
            FilterParseError::InvalidDate("yesterday".to_string())
        );
        assert_eq!(
            parse_day_filter("weight>=heavy").unwrap_err(),
            FilterParseError::InvalidWeight("heavy".to_string())
        );
        assert_eq!(
            parse_day_filter("cardio").unwrap_err(),
            FilterParseError::UnknownTerm("cardio".to_string())
        );
    }
}
