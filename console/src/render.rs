use puzzle2048_common::games::puzzle2048::Grid;

/// One line per row, cells separated by tabs.
pub fn render_grid(grid: &Grid) -> String {
    grid.rows()
        .map(|row| {
            let cells: Vec<String> = row.iter().map(u32::to_string).collect();
            cells.join("\t") + "\n"
        })
        .collect()
}
