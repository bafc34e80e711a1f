#[cfg(test)]
mod test {
    use point_neuron_dynamics::error::NefError;
    use point_neuron_dynamics::nef::network::{
        EnsembleId, Network, NodeId, Simulator, Source, Target, DEFAULT_DT,
    };


    #[test]
    fn test_missing_endpoints_are_rejected() -> Result<(), NefError> {
        let mut network = Network::new(0);

        let node = network.add_constant_node(vec![1.]);
        let ensemble = network.add_ensemble(10, 1)?;

        assert!(matches!(
            network.connect(Source::Node(NodeId(5)), Target::Ensemble(ensemble)),
            Err(NefError::SourceNotFound)
        ));
        assert!(matches!(
            network.connect(Source::Ensemble(EnsembleId(3)), Target::Ensemble(ensemble)),
            Err(NefError::SourceNotFound)
        ));
        assert!(matches!(
            network.connect(Source::Node(node), Target::Ensemble(EnsembleId(3))),
            Err(NefError::TargetNotFound)
        ));
        assert!(matches!(
            network.probe(Source::Ensemble(EnsembleId(3)), None),
            Err(NefError::SourceNotFound)
        ));

        Ok(())
    }

    #[test]
    fn test_only_passthrough_nodes_take_input() -> Result<(), NefError> {
        let mut network = Network::new(0);

        let constant = network.add_constant_node(vec![1.]);
        let function = network.add_node(1, |t| vec![t]);
        let passthrough = network.add_passthrough_node(1);
        let ensemble = network.add_ensemble(10, 1)?;

        assert!(matches!(
            network.connect(Source::Ensemble(ensemble), Target::Node(constant)),
            Err(NefError::InvalidTarget)
        ));
        assert!(matches!(
            network.connect(Source::Ensemble(ensemble), Target::Node(function)),
            Err(NefError::InvalidTarget)
        ));

        network.connect(Source::Ensemble(ensemble), Target::Node(passthrough))?;

        Ok(())
    }

    #[test]
    fn test_identity_connections_check_dimensions() -> Result<(), NefError> {
        let mut network = Network::new(0);

        let node = network.add_constant_node(vec![1., 1.]);
        let ensemble = network.add_ensemble(10, 1)?;

        assert!(matches!(
            network.connect(Source::Node(node), Target::Ensemble(ensemble)),
            Err(NefError::DimensionMismatch)
        ));

        Ok(())
    }

    #[test]
    fn test_decoded_function_dimensions_checked_at_build() -> Result<(), NefError> {
        let mut network = Network::new(0);

        let ensemble = network.add_ensemble(10, 1)?;
        let output = network.add_passthrough_node(1);

        // decoded output of size 2 cannot drive a size 1 node
        network.connect_function(
            Source::Ensemble(ensemble),
            Target::Node(output),
            |x| vec![x[0], x[0]],
        )?;

        assert!(matches!(Simulator::new(network), Err(NefError::DimensionMismatch)));

        Ok(())
    }

    #[test]
    fn test_node_function_dimensions_checked_at_build() -> Result<(), NefError> {
        let mut network = Network::new(0);

        let input = network.add_constant_node(vec![1.]);
        let output = network.add_passthrough_node(3);

        // function output of size 1 cannot drive a size 3 node
        network.connect_function(
            Source::Node(input),
            Target::Node(output),
            |x| vec![x[0]],
        )?;

        assert!(matches!(Simulator::new(network), Err(NefError::DimensionMismatch)));

        Ok(())
    }

    #[test]
    fn test_probe_data_tracks_every_step() -> Result<(), NefError> {
        let mut network = Network::new(1);

        let input = network.add_node(1, |t| vec![t.sin()]);
        let probe = network.probe(Source::Node(input), None)?;

        let mut simulator = Simulator::new(network)?;
        simulator.run(0.25);

        let steps = (0.25 / DEFAULT_DT).round() as usize;

        assert_eq!(simulator.trange().len(), steps);
        assert_eq!(simulator.probe_data(probe).len(), steps);

        for value in simulator.probe_data(probe) {
            assert_eq!(value.len(), 1);
        }

        Ok(())
    }

    #[test]
    fn test_ensemble_represents_constant_input() -> Result<(), NefError> {
        let mut network = Network::new(8);

        let input = network.add_constant_node(vec![0.5]);
        let ensemble = network.add_ensemble(50, 1)?;

        network.connect(Source::Node(input), Target::Ensemble(ensemble))?;
        let probe = network.probe(Source::Ensemble(ensemble), Some(0.01))?;

        let mut simulator = Simulator::new(network)?;
        simulator.run(0.5);

        let data = simulator.probe_data(probe);
        let settled = &data[data.len() - 100..];
        let mean: f32 = settled.iter().map(|value| value[0]).sum::<f32>() / settled.len() as f32;

        assert!((mean - 0.5).abs() < 0.2, "decoded mean was {}", mean);

        Ok(())
    }

    #[test]
    fn test_passthrough_node_carries_decoded_signal() -> Result<(), NefError> {
        let mut network = Network::new(12);

        let input = network.add_constant_node(vec![0.5]);
        let ensemble = network.add_ensemble(50, 1)?;
        let output = network.add_passthrough_node(1);

        network.connect(Source::Node(input), Target::Ensemble(ensemble))?;
        network.connect(Source::Ensemble(ensemble), Target::Node(output))?;
        let probe = network.probe(Source::Node(output), Some(0.01))?;

        let mut simulator = Simulator::new(network)?;
        simulator.run(0.5);

        let data = simulator.probe_data(probe);
        let settled = &data[data.len() - 100..];
        let mean: f32 = settled.iter().map(|value| value[0]).sum::<f32>() / settled.len() as f32;

        assert!((mean - 0.5).abs() < 0.2, "decoded mean was {}", mean);

        Ok(())
    }

    #[test]
    fn test_recurrent_connection_holds_state() -> Result<(), NefError> {
        let mut network = Network::new(4);

        // a brief pulse followed by silence, the recurrent ensemble should
        // hold a nonzero value after the pulse ends
        let input = network.add_node(1, |t| if t < 0.2 { vec![1.] } else { vec![0.] });
        let ensemble = network.add_ensemble(100, 1)?;

        network.connect(Source::Node(input), Target::Ensemble(ensemble))?;
        network.connect_with(
            Source::Ensemble(ensemble),
            Target::Ensemble(ensemble),
            Some(0.1),
            None,
        )?;

        let probe = network.probe(Source::Ensemble(ensemble), Some(0.01))?;

        let mut simulator = Simulator::new(network)?;
        simulator.run(1.);

        let data = simulator.probe_data(probe);
        let settled = &data[data.len() - 100..];
        let mean: f32 = settled.iter().map(|value| value[0]).sum::<f32>() / settled.len() as f32;

        assert!(mean > 0.2, "recurrent ensemble decayed to {}", mean);

        Ok(())
    }

    #[test]
    fn test_ensembles_draw_distinct_seeds() -> Result<(), NefError> {
        let mut network = Network::new(6);

        let first = network.add_ensemble(20, 1)?;
        let second = network.add_ensemble(20, 1)?;

        let first_encoders = &network.ensembles[first.0].encoders;
        let second_encoders = &network.ensembles[second.0].encoders;

        assert_ne!(first_encoders, second_encoders);

        Ok(())
    }
}
