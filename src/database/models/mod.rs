pub mod prescription;

pub use prescription::{NewPrescription, Prescription, PrescriptionPatch};
