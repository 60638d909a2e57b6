/*!
# Pseudocode AST

Typed view of the tree produced by the external pseudocode parser.

## Usage

```rust
use complexity_analyzer::parser::{AstReader, Node};

let reader = AstReader::new();
let tree = reader.read_str(r#"{"type": "program", "body": [{"type": "break"}]}"#)?;
assert_eq!(tree.statements(), &[Node::Break]);
# Ok::<(), complexity_analyzer::core::AnalysisError>(())
```
*/

pub mod ast;
pub mod reader;

pub use ast::{Index, LoopKind, Node};
pub use reader::{AstReader, DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT};
