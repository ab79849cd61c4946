/// All messages that can be sent through the FLTK channel.
/// Each menu callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    FileSave,
    FileSaveAs,
    ExportPdf,
    FileQuit,
    WindowClose,

    // Format
    ChangeFont,
    ChangeFontColor,
    ChangeBackgroundColor,

    // Customize
    SetTheme,
}
