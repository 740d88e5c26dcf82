pub const MENU: &str = "\nLIBRARY MANAGEMENT SYSTEM\n\n\
[1] ADD BOOK\n\
[2] DELETE BOOK\n\
[3] EDIT BOOK\n\
[4] SEARCH BOOKS\n\
[5] VIEW ALL BOOKS\n\
[6] QUIT\n\n\
ENTER CHOICE: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Delete,
    Edit,
    Search,
    ViewAll,
    Quit,
}

impl MenuChoice {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '1' => Some(MenuChoice::Add),
            '2' => Some(MenuChoice::Delete),
            '3' => Some(MenuChoice::Edit),
            '4' => Some(MenuChoice::Search),
            '5' => Some(MenuChoice::ViewAll),
            '6' => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}
