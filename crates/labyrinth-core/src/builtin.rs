//! Predefined mazes.

use crate::error::MazeError;
use crate::maze::Maze;

/// The predefined mazes, one string per row.
pub const MAPS: [&[&str]; 4] = [
    &[
        "############",
        "#  #     # #",
        "## # ### # #",
        "#  # # # # #",
        "## ### # # #",
        "#        # #",
        "## ####### #",
        "#          #",
        "# ######## #",
        "# #   #    #",
        "#   #   # ##",
        "######A#####",
    ],
    &[
        "################################",
        "#                              #",
        "# ############################ #",
        "# # ###       ##  #          # #",
        "# #     ##### ### # ########## #",
        "# #   ##### #     # #      ### #",
        "# # ##### #   ###   # # ## # # #",
        "# # ### # ## ######## # ##   # #",
        "# ##### #  # #   #    #    ### #",
        "# # ### ## # # # # ####### # # #",
        "# #        # #   #     #     # #",
        "# ######## # ######### # ### # #",
        "# ####     #  # #   #  # ##### #",
        "# # #### #### # # # # ## # ### #",
        "#                      # #     #",
        "###########################A####",
    ],
    &[
        "###########################A####",
        "#   #      ## # # ###  #     # #",
        "# ###### #### # # #### ##### # #",
        "# # ###  ## # # # #          # #",
        "# # ### ### # # # # # #### # # #",
        "# #     ### # # # # # ## # # # #",
        "# # # # ### # # # # ######## # #",
        "# # # #     #          #     # #",
        "# ### ################ # # # # #",
        "# #   #             ## # #   # #",
        "# # #### ############# # #   # #",
        "# #                    #     # #",
        "# # #################### # # # #",
        "# # #### #           ###     # #",
        "# # ## # ### ### ### ### # ### #",
        "# #    #     ##  ##  # ###   # #",
        "# ####   ###### #### # ###  ## #",
        "###########################A####",
    ],
    &[
        "#############",
        "#           #",
        "#           #",
        "#           #",
        "###########A#",
    ],
];

/// Build the predefined maze at `index`.
pub fn map(index: usize) -> Result<Maze, MazeError> {
    let rows = MAPS.get(index).ok_or(MazeError::UnknownMap {
        index,
        available: MAPS.len(),
    })?;
    Maze::from_lines(rows.iter())
}
