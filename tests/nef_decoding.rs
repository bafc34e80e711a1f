#[cfg(test)]
mod test {
    use ndarray::Array2;
    use rand::{rngs::StdRng, SeedableRng};

    use point_neuron_dynamics::error::NefError;
    use point_neuron_dynamics::nef::{
        solve_decoders, tuning_curves_1d, Ensemble, RateLif,
    };


    #[test]
    fn test_rate_is_zero_at_or_below_threshold_current() {
        let neuron = RateLif::default();

        assert_eq!(neuron.rate(0.), 0.);
        assert_eq!(neuron.rate(1.), 0.);
        assert!(neuron.rate(1.5) > 0.);
    }

    #[test]
    fn test_rate_and_current_for_rate_are_inverses() {
        let neuron = RateLif::default();

        for target_rate in [10., 50., 200., 400.] {
            let current = neuron.current_for_rate(target_rate);
            assert!((neuron.rate(current) - target_rate).abs() < 0.5);
        }
    }

    #[test]
    fn test_ensemble_generation_errors() {
        assert!(matches!(Ensemble::new(0, 1, 1., 0), Err(NefError::EmptyEnsemble)));
        assert!(matches!(Ensemble::new(10, 0, 1., 0), Err(NefError::DimensionMismatch)));
    }

    #[test]
    fn test_encoders_are_unit_length() -> Result<(), NefError> {
        let ensemble = Ensemble::new(50, 3, 1., 17)?;

        for row in ensemble.encoders.rows() {
            let norm = row.iter().map(|value| value * value).sum::<f32>().sqrt();
            assert!((norm - 1.).abs() < 1e-5);
        }

        Ok(())
    }

    #[test]
    fn test_rates_dimension_checked() -> Result<(), NefError> {
        let ensemble = Ensemble::new(10, 1, 1., 3)?;

        assert!(matches!(ensemble.rates(&[0., 0.]), Err(NefError::DimensionMismatch)));
        assert!(ensemble.rates(&[0.]).is_ok());

        Ok(())
    }

    #[test]
    fn test_tuning_curves_span_radius_and_stay_nonnegative() -> Result<(), NefError> {
        let radius = 30.;
        let ensemble = Ensemble::new(50, 1, radius, 42)?;

        let (inputs, activities) = tuning_curves_1d(&ensemble, 100)?;

        assert_eq!(inputs.len(), 100);
        assert_eq!(activities.nrows(), 100);
        assert_eq!(activities.ncols(), 50);

        assert!((inputs[0] + radius).abs() < 1e-3);
        assert!((inputs[inputs.len() - 1] - radius).abs() < 1e-3);

        for rate in activities.iter() {
            assert!(*rate >= 0.);
            assert!(rate.is_finite());
        }

        // every neuron should fire somewhere over the representational range
        for column in activities.columns() {
            assert!(column.iter().any(|rate| *rate > 0.));
        }

        Ok(())
    }

    #[test]
    fn test_tuning_curves_require_one_dimension() -> Result<(), NefError> {
        let ensemble = Ensemble::new(10, 2, 1., 5)?;

        assert!(matches!(tuning_curves_1d(&ensemble, 50), Err(NefError::DimensionMismatch)));

        Ok(())
    }

    #[test]
    fn test_identity_decode_accuracy() -> Result<(), NefError> {
        let ensemble = Ensemble::new(100, 1, 1., 7)?;
        let mut rng = StdRng::seed_from_u64(99);

        let eval_points = ensemble.sample_eval_points(500, &mut rng);
        let targets = eval_points.clone();

        let decoders = solve_decoders(&ensemble, &eval_points, &targets)?;

        assert_eq!(decoders.nrows(), 100);
        assert_eq!(decoders.ncols(), 1);

        let activities = ensemble.activities(&eval_points)?;
        let decoded = activities.dot(&decoders);

        let mut squared_error = 0.;
        for (estimate, target) in decoded.iter().zip(targets.iter()) {
            squared_error += (estimate - target) * (estimate - target);
        }
        let rmse = (squared_error / targets.len() as f32).sqrt();

        assert!(rmse < 0.1, "identity decode rmse was {}", rmse);

        Ok(())
    }

    #[test]
    fn test_solve_decoders_input_checks() -> Result<(), NefError> {
        let ensemble = Ensemble::new(10, 1, 1., 11)?;

        let empty = Array2::<f32>::zeros((0, 1));
        assert!(matches!(
            solve_decoders(&ensemble, &empty, &empty),
            Err(NefError::NoEvaluationPoints)
        ));

        let points = Array2::<f32>::zeros((5, 1));
        let targets = Array2::<f32>::zeros((4, 1));
        assert!(matches!(
            solve_decoders(&ensemble, &points, &targets),
            Err(NefError::DimensionMismatch)
        ));

        Ok(())
    }

    #[test]
    fn test_eval_points_stay_within_radius() -> Result<(), NefError> {
        let radius = 1.5;
        let ensemble = Ensemble::new(10, 2, radius, 23)?;
        let mut rng = StdRng::seed_from_u64(1);

        let points = ensemble.sample_eval_points(200, &mut rng);

        assert_eq!(points.nrows(), 200);
        assert_eq!(points.ncols(), 2);

        for point in points.rows() {
            let norm = point.iter().map(|value| value * value).sum::<f32>().sqrt();
            assert!(norm <= radius + 1e-4);
        }

        Ok(())
    }
}
