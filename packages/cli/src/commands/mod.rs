pub mod blocks;
pub mod export;
pub mod generate;
pub mod init;
pub mod new;
pub mod snippet;

pub use blocks::{blocks, BlocksArgs};
pub use export::{export, ExportArgs};
pub use generate::{generate, GenerateArgs};
pub use init::{init, InitArgs};
pub use new::{new_page, NewArgs};
pub use snippet::{snippet, SnippetArgs};
