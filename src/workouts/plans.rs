use super::{Exercise, WorkoutBlock};

const fn ex(name: &'static str, reps: &'static str, video: &'static str) -> Exercise {
    Exercise { name, reps, video }
}

pub(super) const HOME_LOSE: &[WorkoutBlock] = &[
    WorkoutBlock {
        title: "Кардио + корпус",
        exercises: &[
            ex("Берпи", "3×12", "https://www.youtube.com/watch?v=TU8QYVW0gDU"),
            ex("Планка", "3×40 сек", "https://www.youtube.com/watch?v=pSHjTRCQxIw"),
            ex("Скручивания", "3×20", "https://www.youtube.com/watch?v=wkD8rjkodUI"),
        ],
    },
    WorkoutBlock {
        title: "Ноги + ягодицы",
        exercises: &[
            ex("Приседания", "4×15", "https://www.youtube.com/watch?v=aclHkVaku9U"),
            ex("Выпады", "3×12/нога", "https://www.youtube.com/watch?v=QOVaHwm-Q6U"),
        ],
    },
];

pub(super) const HOME_MAINTAIN: &[WorkoutBlock] = &[WorkoutBlock {
    title: "Фуллбоди",
    exercises: &[
        ex("Отжимания", "4×12", "https://www.youtube.com/watch?v=_l3ySVKYVJ8"),
        ex(
            "Тяга в наклоне (с резиной)",
            "4×12",
            "https://www.youtube.com/watch?v=vT2GjY_Umpw",
        ),
        ex("Приседания", "4×15", "https://www.youtube.com/watch?v=aclHkVaku9U"),
    ],
}];

pub(super) const HOME_GAIN: &[WorkoutBlock] = &[WorkoutBlock {
    title: "Фуллбоди прогрессия",
    exercises: &[
        ex("Отжимания с отягощ.", "5×8–12", "https://www.youtube.com/watch?v=_l3ySVKYVJ8"),
        ex("Резиновая тяга шир.", "5×10–12", "https://www.youtube.com/watch?v=vT2GjY_Umpw"),
        ex("Приседания плие", "5×12–15", "https://www.youtube.com/watch?v=3GpK4D8LQ6U"),
    ],
}];

pub(super) const GYM_LOSE: &[WorkoutBlock] = &[WorkoutBlock {
    title: "Кардио + пресс",
    exercises: &[
        ex("Беговая дорожка", "20–30 мин", "https://www.youtube.com/watch?v=QdQ1YxU1Zt0"),
        ex("Скручивания на полу", "4×20", "https://www.youtube.com/watch?v=wkD8rjkodUI"),
    ],
}];

pub(super) const GYM_MAINTAIN: &[WorkoutBlock] = &[
    WorkoutBlock {
        title: "Верх/Низ — День Верх",
        exercises: &[
            ex("Жим лёжа", "4×6–10", "https://www.youtube.com/watch?v=rT7DgCr-3pg"),
            ex("Тяга верхнего блока", "4×8–12", "https://www.youtube.com/watch?v=CAwf7n6Luuc"),
            ex("Жим гантелей сидя", "3×8–12", "https://www.youtube.com/watch?v=B-aVuyhvLHU"),
        ],
    },
    WorkoutBlock {
        title: "Верх/Низ — День Низ",
        exercises: &[
            ex("Приседания со штангой", "4×6–10", "https://www.youtube.com/watch?v=aclHkVaku9U"),
            ex("Становая тяга", "3×5–8", "https://www.youtube.com/watch?v=op9kVnSso6Q"),
        ],
    },
];

pub(super) const GYM_GAIN: &[WorkoutBlock] = &[WorkoutBlock {
    title: "Гипертрофия — Фуллбоди",
    exercises: &[
        ex("Жим гантелей лёжа", "4×8–12", "https://www.youtube.com/watch?v=VmB1G1K7v94"),
        ex("Тяга штанги в наклоне", "4×8–12", "https://www.youtube.com/watch?v=vT2GjY_Umpw"),
        ex("Жим ногами", "4×10–15", "https://www.youtube.com/watch?v=IZxyjW7MPJQ"),
    ],
}];
