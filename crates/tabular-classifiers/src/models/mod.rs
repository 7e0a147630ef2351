pub mod classifier_trait;
pub mod logistic;

pub use classifier_trait::ClassifierModel;
pub use logistic::{logistic_loss, predict_logistic, sigmoid, RegLogisticRegression};
