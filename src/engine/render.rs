use crate::engine::board::Board;

const TOP: &str = "╔═╤═╤═╤═╤═╤═╤═╤═╗╮";
const SEPARATOR: &str = "╟─┼─┼─┼─┼─┼─┼─┼─╢┊";
const BOTTOM: &str = "╚═╧═╧═╧═╧═╧═╧═╧═╝┊";
const FILES: &str = "╰a┈b┈c┈d┈e┈f┈g┈h┈╯";

/// Draws the board with rank 8 on top. Blank squares are spaces and the
/// result always ends with a newline.
pub fn render(board: &Board) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str(TOP);
    out.push('\n');
    for (row_index, row) in board.rows().iter().enumerate().rev() {
        out.push('║');
        for (column, cell) in row.iter().enumerate() {
            if column > 0 {
                out.push('│');
            }
            out.push(cell.map(|piece| piece.glyph()).unwrap_or(' '));
        }
        out.push('║');
        out.push(char::from(b'1' + row_index as u8));
        out.push('\n');
        out.push_str(if row_index > 0 { SEPARATOR } else { BOTTOM });
        out.push('\n');
    }
    out.push_str(FILES);
    out.push('\n');
    out
}
