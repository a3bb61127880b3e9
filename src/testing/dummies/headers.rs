use crate::core::DatasetHeader;
use std::sync::Arc;

/// Two features `f0`, `f1` and two classes `A`, `B`.
pub fn header_two_features() -> Arc<DatasetHeader> {
    Arc::new(
        DatasetHeader::new(
            "bin".into(),
            vec!["f0".into(), "f1".into()],
            vec!["A".into(), "B".into()],
        )
        .expect("static header is valid"),
    )
}
