#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use claimscan::config::{
        AggregationConfig, AmountPolicy, ChronicPolicy, InpatientRatioPolicy,
    };
    use claimscan::models::{ClaimRecord, FEATURE_COUNT, FeatureVector, Gender};
    use claimscan::{ClaimscanError, FeatureAggregator, build_model_payload};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    fn claim(beneficiary: &str, amount: Option<f64>) -> ClaimRecord {
        ClaimRecord {
            provider: Some("PRV1".to_string()),
            beneficiary: Some(beneficiary.to_string()),
            reimbursed_amount: amount,
            ..ClaimRecord::default()
        }
    }

    #[test]
    fn test_amount_statistics_scenario() {
        // Three claims of 100 / 200 / 300 for one beneficiary
        let records = vec![
            claim("B1", Some(100.0)),
            claim("B1", Some(200.0)),
            claim("B1", Some(300.0)),
        ];

        let (vector, explain) = FeatureAggregator::new().aggregate("PRV1", &records);
        let values = vector.as_slice();

        assert_close(values[0], 3.0); // total_claims
        assert_close(values[1], 1.0); // total_beneficiaries
        assert_close(values[2], 200.0); // avg_claim_amount
        assert_close(values[3], 300.0); // max_claim_amount
        assert!((values[4] - 81.6497).abs() < 1e-3); // std_claim_amount
        assert_close(values[12], 3.0 / 2.0); // claims_per_beneficiary, smoothed
        assert_close(values[13], 300.0 / 201.0); // max_to_avg_claim_ratio

        assert_eq!(explain.total_claims, 3);
        assert_eq!(explain.total_beneficiaries, 1);
        assert_eq!(explain.reason, None);
    }

    #[test]
    fn test_empty_history_is_zero_vector() {
        let (vector, explain) = FeatureAggregator::new().aggregate("PRV1", &[]);
        assert_eq!(vector, FeatureVector::zeros());
        assert_eq!(explain.reason.as_deref(), Some("No claims for provider"));
        assert_eq!(explain.total_claims, 0);
    }

    #[test]
    fn test_amount_policy_changes_denominator() {
        let records = vec![claim("B1", Some(100.0)), claim("B2", None)];

        let exclude = FeatureAggregator::with_config(AggregationConfig {
            amount_policy: AmountPolicy::ExcludeMissing,
            ..AggregationConfig::default()
        });
        let (vector, _) = exclude.aggregate("PRV1", &records);
        assert_close(vector.as_slice()[2], 100.0);
        assert_close(vector.as_slice()[4], 0.0);

        let as_zero = FeatureAggregator::with_config(AggregationConfig {
            amount_policy: AmountPolicy::MissingAsZero,
            ..AggregationConfig::default()
        });
        let (vector, _) = as_zero.aggregate("PRV1", &records);
        assert_close(vector.as_slice()[2], 50.0);
        assert_close(vector.as_slice()[4], 50.0);
    }

    #[test]
    fn test_length_of_stay_excludes_partial_records() {
        let mut with_stay = claim("B1", None);
        with_stay.claim_start = NaiveDate::from_ymd_opt(2009, 3, 1);
        with_stay.claim_end = NaiveDate::from_ymd_opt(2009, 3, 6);
        // No end date: contributes to neither numerator nor denominator
        let mut without_end = claim("B1", None);
        without_end.claim_start = NaiveDate::from_ymd_opt(2009, 3, 1);

        let (vector, _) =
            FeatureAggregator::new().aggregate("PRV1", &[with_stay, without_end]);
        assert_close(vector.as_slice()[5], 5.0);
    }

    #[test]
    fn test_age_uses_whole_years_with_rollover() {
        let mut before_birthday = claim("B1", None);
        before_birthday.date_of_birth = NaiveDate::from_ymd_opt(1940, 6, 15);
        before_birthday.claim_start = NaiveDate::from_ymd_opt(2009, 6, 14);

        let (vector, _) = FeatureAggregator::new().aggregate("PRV1", &[before_birthday]);
        assert_close(vector.as_slice()[7], 68.0);
    }

    #[test]
    fn test_gender_percentages_defined_at_zero() {
        let records = vec![claim("B1", None)];
        let (vector, _) = FeatureAggregator::new().aggregate("PRV1", &records);
        assert_close(vector.as_slice()[8], 0.0);
        assert_close(vector.as_slice()[9], 0.0);

        let mut male = claim("B1", None);
        male.gender = Gender::Male;
        let mut female1 = claim("B2", None);
        female1.gender = Gender::Female;
        let mut female2 = claim("B3", None);
        female2.gender = Gender::Female;
        let mut unknown = claim("B4", None);
        unknown.gender = Gender::Unknown;

        let (vector, _) =
            FeatureAggregator::new().aggregate("PRV1", &[male, female1, female2, unknown]);
        assert_close(vector.as_slice()[8], 1.0 / 3.0);
        assert_close(vector.as_slice()[9], 2.0 / 3.0);
    }

    #[test]
    fn test_chronic_policies_diverge() {
        // One beneficiary, two claims flagging different conditions
        let mut first = claim("B1", None);
        first.chronic_flags[0] = 1;
        let mut second = claim("B1", None);
        second.chronic_flags[1] = 1;
        let records = vec![first, second];

        let per_beneficiary = FeatureAggregator::with_config(AggregationConfig {
            chronic_policy: ChronicPolicy::PerBeneficiary,
            ..AggregationConfig::default()
        });
        let (vector, _) = per_beneficiary.aggregate("PRV1", &records);
        // Max across the beneficiary's claims: both conditions count
        assert_close(vector.as_slice()[10], 2.0 / 11.0);

        let per_claim = FeatureAggregator::with_config(AggregationConfig {
            chronic_policy: ChronicPolicy::PerClaim,
            ..AggregationConfig::default()
        });
        let (vector, _) = per_claim.aggregate("PRV1", &records);
        // Each condition present on half the claims
        assert_close(vector.as_slice()[10], 1.0 / 11.0);
    }

    #[test]
    fn test_inpatient_ratio_policies() {
        let mut admitted = claim("B1", None);
        admitted.admission_date = NaiveDate::from_ymd_opt(2009, 2, 1);
        let records = vec![admitted, claim("B2", None), claim("B3", None)];

        let dynamic = FeatureAggregator::with_config(AggregationConfig {
            inpatient_ratio_policy: InpatientRatioPolicy::Dynamic,
            ..AggregationConfig::default()
        });
        let (vector, _) = dynamic.aggregate("PRV1", &records);
        assert_close(vector.as_slice()[11], 1.0 / 3.0);

        let frozen = FeatureAggregator::with_config(AggregationConfig {
            inpatient_ratio_policy: InpatientRatioPolicy::Frozen,
            ..AggregationConfig::default()
        });
        let (vector, _) = frozen.aggregate("PRV1", &records);
        assert_close(vector.as_slice()[11], 1.0);
    }

    #[test]
    fn test_distinct_diagnoses_counted_once() {
        let mut first = claim("B1", None);
        first.diagnosis_code = Some("201".to_string());
        let mut second = claim("B2", None);
        second.diagnosis_code = Some("201".to_string());
        let mut third = claim("B3", None);
        third.diagnosis_code = Some("560".to_string());

        let (vector, _) = FeatureAggregator::new().aggregate("PRV1", &[first, second, third]);
        assert_close(vector.as_slice()[6], 2.0);
    }

    #[test]
    fn test_aggregation_is_deterministic_and_non_mutating() {
        let records = vec![
            claim("B1", Some(120.0)),
            claim("B2", Some(340.5)),
            claim("B1", None),
        ];
        let snapshot = records.clone();

        let aggregator = FeatureAggregator::new();
        let (first, _) = aggregator.aggregate("PRV1", &records);
        let (second, _) = aggregator.aggregate("PRV1", &records);

        assert_eq!(first, second);
        assert_eq!(records, snapshot);
    }

    #[test]
    fn test_payload_wraps_vector_as_single_row() {
        let records = vec![claim("B1", Some(100.0))];
        let (payload, explain) =
            build_model_payload("prv1", &records, &AggregationConfig::default()).unwrap();

        assert_eq!(payload.data.len(), 1);
        assert_eq!(payload.data[0].len(), FEATURE_COUNT);
        assert_close(payload.data[0][0], 1.0);
        assert_eq!(explain.total_claims, 1);
    }

    #[test]
    fn test_payload_rejects_missing_provider_id() {
        let result = build_model_payload("   ", &[], &AggregationConfig::default());
        assert!(matches!(result, Err(ClaimscanError::MissingProviderId)));
    }
}
