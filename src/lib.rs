pub mod configuration;

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod realfunction;
    pub mod numericalerror;

    pub mod differentiate {
        pub mod backward;
        pub mod differentiator;
        pub mod differentiatormanager;
    }

    pub mod integrate {
        pub mod trapezoid;
        pub mod integrator;
        pub mod integratormanager;
    }
}

pub use math::differentiate::backward::backward;
pub use math::integrate::trapezoid::trapezoid;
pub use math::numericalerror::{
    NumericalError,
    ValidationError
};
pub use math::realfunction::RealFunction;
