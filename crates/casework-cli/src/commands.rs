mod convert;
mod inflect;
mod keys;
mod split;
mod styles;
mod transform;

pub(crate) use convert::ConvertCommand;
pub(crate) use inflect::InflectCommand;
pub(crate) use keys::KeysCommand;
pub(crate) use split::SplitCommand;
pub(crate) use styles::StylesCommand;
pub(crate) use transform::TransformCommand;
