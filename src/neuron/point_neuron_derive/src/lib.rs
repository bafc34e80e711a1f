use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};


/// Derive macro to automatically implement the accessor traits required by the
/// `PointNeuron` trait, including `CurrentVoltage`, `IsSpiking`, `LastFiringTime`,
/// `Timestep`, and `GaussianFactor`
///
/// The deriving struct must have `current_voltage`, `is_spiking`,
/// `last_firing_time`, `dt`, and `gaussian_params` fields
#[proc_macro_derive(PointNeuronBase)]
pub fn derive_point_neuron_traits(input: TokenStream) -> TokenStream {
    // Parse the input tokens into a syntax tree
    let input = parse_macro_input!(input as DeriveInput);

    // Get the name of the struct we are deriving the trait for
    let name = input.ident;

    // Generate the implementation of the trait
    let expanded = quote! {
        impl CurrentVoltage for #name {
            fn get_current_voltage(&self) -> f32 {
                self.current_voltage
            }
        }

        impl IsSpiking for #name {
            fn is_spiking(&self) -> bool {
                self.is_spiking
            }
        }

        impl LastFiringTime for #name {
            fn set_last_firing_time(&mut self, timestep: Option<usize>) {
                self.last_firing_time = timestep;
            }

            fn get_last_firing_time(&self) -> Option<usize> {
                self.last_firing_time
            }
        }

        impl Timestep for #name {
            fn get_dt(&self) -> f32 {
                self.dt
            }

            fn set_dt(&mut self, dt: f32) {
                self.dt = dt;
            }
        }

        impl GaussianFactor for #name {
            fn get_gaussian_factor(&self) -> f32 {
                self.gaussian_params.get_random_number()
            }
        }
    };

    TokenStream::from(expanded)
}
