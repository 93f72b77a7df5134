#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64, String), // id, title
    TaskSaved(String),        // title
    TaskDeleted(i64),
    TaskStatusChanged(i64, String), // id, status label
    TitleRequired,
    TaskNotFoundWithId(i64),
    TaskCreateFailed(String),       // error
    TaskSaveFailed(String),         // error
    TaskDeleteFailed(String),       // error
    TaskStatusChangeFailed(String), // error
    TasksLoadFailed(String),        // error
    ConfirmDeleteTask(i64),
    NoTasks,
    TasksHeader,
    DetailUnavailable,
    ViewUnavailable(String), // error
    NoChangesGiven,

    // === BANNER MESSAGES ===
    BannerUpdated,
    BannerRemoved,
    BannerImportFailed(String), // error
    BannerRemoveFailed(String), // error
    ImageUpdateFailed(String),  // error
    NoBanner,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleAppearance,

    // === PROMPTS ===
    PromptTaskTitle,
    PromptTaskDescription,
    PromptSelectAction,
    PromptSelectTask,
    PromptSelectStatus,
    PromptBannerPath,
    PromptTheme,

    // === MENU ENTRIES ===
    MenuAddTask,
    MenuOpenTask,
    MenuChangeStatus,
    MenuDeleteTask,
    MenuQuit,
    MenuEditDescription,
    MenuUploadBanner,
    MenuRemoveBanner,
    MenuSave,
    MenuBack,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
