// Library root
// ------------
// The binary (`main.rs`) parses the command line and hands over to these
// modules, which form one pipeline shared by both search modes.
//
// Module responsibilities:
// - `geo`: coordinates, the query box and the ranking reference point.
// - `input`: interactive prompts and the fixed-order radius arguments.
// - `api`: the blocking HTTP client for the airport search index.
// - `rank`: planar distance and stable closest-first ordering.
// - `output`: the plain text listing.
// - `pipeline`: area -> fetch -> rank -> present.
// - `cli`: clap definitions and command dispatch.
// - `logging`: stderr logger setup.
pub mod api;
pub mod cli;
pub mod geo;
pub mod input;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod rank;
