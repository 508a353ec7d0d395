use chrono::NaiveDate;
use smartcast_model::{VideoId, VideoRecord};

struct SampleVideo {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    thumbnail_url: &'static str,
    video_url: &'static str,
    duration_seconds: u32,
    resolution: &'static str,
    uploaded: (i32, u32, u32),
}

const SAMPLES: &[SampleVideo] = &[
    SampleVideo {
        id: "1",
        title: "Big Buck Bunny",
        description: "A large and lovable rabbit deals with three bullying rodents. This animated short film was produced by the Blender Foundation.",
        thumbnail_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/c/c5/Big_buck_bunny_poster_big.jpg/800px-Big_buck_bunny_poster_big.jpg",
        video_url: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4",
        duration_seconds: 596,
        resolution: "1080p",
        uploaded: (2024, 1, 15),
    },
    SampleVideo {
        id: "2",
        title: "Sintel",
        description: "A lonely young woman searches for her lost pet dragon in a world of warriors and medieval fantasy.",
        thumbnail_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/f/f4/Sintel_poster.jpg/800px-Sintel_poster.jpg",
        video_url: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/Sintel.mp4",
        duration_seconds: 888,
        resolution: "1080p",
        uploaded: (2024, 2, 20),
    },
    SampleVideo {
        id: "3",
        title: "Tears of Steel",
        description: "In a futuristic world, scientists use robots to fight against an evil dictator who seeks world domination.",
        thumbnail_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/0/0c/Tears_of_Steel_Promo.jpg/800px-Tears_of_Steel_Promo.jpg",
        video_url: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/TearsOfSteel.mp4",
        duration_seconds: 734,
        resolution: "1080p",
        uploaded: (2024, 3, 10),
    },
    SampleVideo {
        id: "4",
        title: "Elephant Dream",
        description: "Two people lost in a surreal digital world must find their way out together through collaboration and trust.",
        thumbnail_url: "https://upload.wikimedia.org/wikipedia/commons/thumb/e/e8/Elephants_Dream_s5_both.jpg/800px-Elephants_Dream_s5_both.jpg",
        video_url: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ElephantsDream.mp4",
        duration_seconds: 653,
        resolution: "1080p",
        uploaded: (2024, 4, 5),
    },
    SampleVideo {
        id: "5",
        title: "For Bigger Blazes",
        description: "An action-packed demonstration showcasing the latest in visual effects technology for film and entertainment.",
        thumbnail_url: "https://images.unsplash.com/photo-1536440136628-849c177e76a1?w=800",
        video_url: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerBlazes.mp4",
        duration_seconds: 15,
        resolution: "720p",
        uploaded: (2024, 5, 12),
    },
    SampleVideo {
        id: "6",
        title: "For Bigger Escapes",
        description: "Experience the thrill of adventure with stunning cinematography that captures breathtaking moments.",
        thumbnail_url: "https://images.unsplash.com/photo-1478720568477-152d9b164e26?w=800",
        video_url: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerEscapes.mp4",
        duration_seconds: 15,
        resolution: "720p",
        uploaded: (2024, 6, 18),
    },
];

pub(super) fn records() -> Vec<VideoRecord> {
    SAMPLES
        .iter()
        .filter_map(|sample| {
            let (year, month, day) = sample.uploaded;
            Some(VideoRecord {
                id: VideoId::new(sample.id).ok()?,
                title: sample.title.to_string(),
                description: sample.description.to_string(),
                thumbnail_url: sample.thumbnail_url.to_string(),
                video_url: sample.video_url.to_string(),
                duration_seconds: sample.duration_seconds,
                resolution: sample.resolution.to_string(),
                upload_date: NaiveDate::from_ymd_opt(year, month, day)?,
            })
        })
        .collect()
}
