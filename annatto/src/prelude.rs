pub use crate::data_structs::annotation::{
    AnnotationSet,
    Feature,
    FeatureAttributes,
    FeatureId,
};
pub use crate::data_structs::{
    Interval,
    Kingdom,
    Strand,
};
pub use crate::error::{
    Error,
    Result,
};
pub use crate::io::{
    read_sequences,
    write_sequences,
    GffWriter,
    SeqRecord,
};
pub use crate::pipeline::{
    DbCatalog,
    Pipeline,
    PipelineConfig,
    RunSummary,
    ToolSetting,
};
pub use crate::tools::{
    FeatureIdentify,
    HomologySearch,
    ToolOutput,
    ToolRegistry,
};
