//! The fixed record set loaded into the store at startup.
//!
//! Three featured articles, eight exercises, four equipment picks. Any seed
//! set works as long as slugs stay unique per collection; a collision here
//! aborts startup instead of silently shadowing a record.

use thiserror::Error;

use crate::{
    article::NewBlogPost,
    equipment::NewEquipment,
    exercise::{Category, Difficulty, NewExercise},
    query::Catalog,
    slug::{EmptySlug, Slug},
    store::{ContentStore, SlugConflict},
};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("invalid seed slug: {0}")]
    Slug(#[from] EmptySlug),
    #[error(transparent)]
    Conflict(#[from] SlugConflict),
}

/// Builds and seeds a store, returning the read-only catalog the server and
/// CLI share.
pub fn sample_catalog() -> Result<Catalog, SeedError> {
    let mut store = ContentStore::new();

    for post in sample_posts()? {
        store.insert_post(post)?;
    }
    for exercise in sample_exercises()? {
        store.insert_exercise(exercise)?;
    }
    for item in sample_equipment() {
        store.insert_equipment(item);
    }

    Ok(Catalog::new(store))
}

fn sample_posts() -> Result<Vec<NewBlogPost>, EmptySlug> {
    Ok(vec![
        NewBlogPost {
            title: "Mastering the Deadlift: Complete Form Guide".to_string(),
            excerpt: "Learn proper deadlift technique to build total-body strength safely and effectively. Includes common mistakes to avoid and progression tips.".to_string(),
            content: "The deadlift is often called the king of all exercises, and for good reason. This compound movement engages more muscles than any other single exercise, making it incredibly efficient for building strength and muscle mass. In this comprehensive guide, we'll cover everything you need to know about mastering the deadlift.

## Why Deadlifts Matter

Deadlifts work your entire posterior chain - your hamstrings, glutes, erector spinae, lats, traps, and rhomboids. They also engage your core muscles and forearms, making it a true full-body exercise. Regular deadlifting can improve your posture, strengthen your back, and increase your overall functional strength.

## Proper Form

1. **Setup**: Stand with feet hip-width apart, toes pointing slightly outward. The barbell should be over the middle of your feet.
2. **Grip**: Reach down and grip the bar with hands just outside your legs. Use either a double overhand grip or mixed grip.
3. **Position**: Keep your chest up, shoulders back, and core engaged. Your shins should be close to the bar.
4. **The Lift**: Drive through your heels, keeping the bar close to your body. Extend your hips and knees simultaneously.
5. **Lockout**: Stand tall with shoulders back and hips fully extended.
6. **Descent**: Lower the bar by pushing your hips back first, then bending your knees.

## Common Mistakes to Avoid

- Rounding your back
- Looking up during the lift
- Allowing the bar to drift away from your body
- Not fully extending your hips at the top
- Dropping the weight instead of controlling the descent

## Progression Tips

Start with lighter weights and focus on perfect form. Gradually increase the weight as you become more comfortable with the movement. Consider variations like sumo deadlifts or Romanian deadlifts to target different muscle groups and keep your training interesting.".to_string(),
            category: "Strength".to_string(),
            publish_date: "Mar 15, 2024".to_string(),
            image_url: "https://images.unsplash.com/photo-1581009146145-b5ef050c2e1e?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string(),
            slug: "mastering-deadlift-form-guide".parse()?,
        },
        NewBlogPost {
            title: "Perfect Your Squat: Depth, Form, and Variations".to_string(),
            excerpt: "Discover the secrets to a perfect squat, from achieving proper depth to exploring different variations that target specific muscle groups.".to_string(),
            content: "The squat is a fundamental movement pattern that translates to many daily activities. Whether you're sitting down, standing up, or picking something up from the ground, you're essentially performing a squat. Mastering this exercise is crucial for building lower body strength and improving functional movement.

## The Benefits of Squatting

Squats primarily target your quadriceps, glutes, and hamstrings, but they also engage your core muscles for stability. Regular squatting can improve your hip and ankle mobility, strengthen your knees, and enhance your athletic performance.

## Proper Squat Form

1. **Stance**: Stand with feet slightly wider than hip-width, toes pointing slightly outward.
2. **Descent**: Initiate the movement by pushing your hips back, then bending your knees.
3. **Depth**: Descend until your hip crease is below your knee cap.
4. **Knees**: Keep your knees in line with your toes throughout the movement.
5. **Ascent**: Drive through your heels and push the floor away to return to standing.

## Squat Variations

### Goblet Squats
Perfect for beginners, holding a dumbbell or kettlebell at chest level helps maintain proper posture.

### Back Squats
The classic barbell squat with the weight positioned on your upper back.

### Front Squats
More quad-dominant variation with the weight held in front of your body.

### Bulgarian Split Squats
Single-leg variation that challenges stability and addresses imbalances.

## Common Issues and Solutions

**Knee Cave**: If your knees collapse inward, focus on pushing them out and strengthening your glutes.
**Forward Lean**: This often indicates tight hip flexors or weak core muscles.
**Heel Rise**: If your heels come up, work on ankle mobility or use heel-elevated squats.

## Programming Your Squats

Start with bodyweight squats and master the movement pattern before adding weight. Aim for 2-3 sets of 8-12 repetitions, focusing on quality over quantity.".to_string(),
            category: "Technique".to_string(),
            publish_date: "Mar 12, 2024".to_string(),
            image_url: "https://images.unsplash.com/photo-1574680178050-55c6a6a96e0a?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string(),
            slug: "perfect-squat-depth-form-variations".parse()?,
        },
        NewBlogPost {
            title: "Bench Press Mastery: Build Chest Power Safely".to_string(),
            excerpt: "Everything you need to know about bench pressing: proper setup, breathing techniques, and progressive overload strategies.".to_string(),
            content: "The bench press is one of the most popular exercises in the gym, and it's a fantastic way to build upper body strength and muscle mass. However, it's also one of the most technical lifts, requiring proper setup and execution to be both safe and effective.

## Setting Up for Success

### Bench Position
Lie on the bench with your eyes directly under the barbell. Your head, upper back, and glutes should maintain contact with the bench throughout the movement.

### Foot Position
Plant your feet firmly on the ground. Some lifters prefer to tuck their feet under the bench for better leg drive.

### Grip and Hand Position
Grip the bar with hands slightly wider than shoulder-width. Your forearms should be vertical at the bottom of the movement.

## The Bench Press Movement

1. **Unrack**: Lift the bar off the hooks with straight arms and position it over your chest.
2. **Descent**: Lower the bar to your chest in a controlled manner, taking 2-3 seconds.
3. **Touch Point**: The bar should touch your chest around nipple level.
4. **Press**: Drive the bar up powerfully, focusing on pushing yourself away from the bar.
5. **Lockout**: Extend your arms fully without letting your shoulders roll forward.

## Breathing Technique

Take a deep breath at the top and hold it during the descent and press. This creates intra-abdominal pressure and provides core stability. Exhale after completing the rep.

## Common Mistakes

- Bouncing the bar off the chest
- Flaring the elbows too wide
- Lifting the head off the bench
- Pressing the bar forward instead of straight up
- Not maintaining proper shoulder blade retraction

## Bench Press Variations

### Incline Bench Press
Targets the upper chest and front deltoids more than the flat bench.

### Decline Bench Press
Emphasizes the lower chest muscles.

### Dumbbell Bench Press
Allows for a greater range of motion and helps address strength imbalances.

### Close-Grip Bench Press
Shifts focus to the triceps while still working the chest.

## Safety Considerations

Always use a spotter when lifting heavy weights, especially when training to failure. If you don't have a spotter, use safety bars or pins set at an appropriate height. Start with lighter weights and gradually progress as your strength and technique improve.".to_string(),
            category: "Upper Body".to_string(),
            publish_date: "Mar 10, 2024".to_string(),
            image_url: "https://pixabay.com/get/g56968c5a3b0a51a10d4b00a72e664df47510059478d2dcb1495651fa6ef4915a84254e9d7510dde39a6a92e113177febbd61d4fca8ccdb1daf900595eaaafe92_1280.jpg".to_string(),
            slug: "bench-press-mastery-build-chest-power".parse()?,
        },
    ])
}

fn sample_exercises() -> Result<Vec<NewExercise>, EmptySlug> {
    let entries = [
        (
            "Pull-ups",
            "Lats, Biceps, Upper Back",
            Difficulty::Intermediate,
            Category::Upper,
            "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300",
            "Hang from a pull-up bar with hands slightly wider than shoulder-width apart. Pull your body up until your chin clears the bar, then lower with control.",
            [
                "Keep your core engaged",
                "Don't swing or kip",
                "Focus on pulling with your back muscles",
                "Control the descent",
            ],
        ),
        (
            "Overhead Press",
            "Shoulders, Triceps, Core",
            Difficulty::Beginner,
            Category::Upper,
            "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300",
            "Stand with feet hip-width apart, press the weight from shoulder level straight overhead until arms are fully extended.",
            [
                "Keep your core tight",
                "Don't arch your back excessively",
                "Press in a straight line",
                "Control the descent",
            ],
        ),
        (
            "Dumbbell Lunges",
            "Quads, Glutes, Core",
            Difficulty::Beginner,
            Category::Lower,
            "https://images.unsplash.com/photo-1566241440091-ec10de8db2e1?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300",
            "Step forward into a lunge position, lowering your back knee toward the ground. Push through your front heel to return to starting position.",
            [
                "Keep your front knee over your ankle",
                "Don't let your knee collapse inward",
                "Step far enough forward",
                "Keep your torso upright",
            ],
        ),
        (
            "Plank Hold",
            "Core, Shoulders, Glutes",
            Difficulty::Beginner,
            Category::Core,
            "https://pixabay.com/get/g836d15c4feeec2ef0131030de93cf054d86a008c006dde8c55156ff35db6abe6fd61f9c3515352e96edcce213861f81f19af0e92eddff93e0b9b9e759ce78868_1280.jpg",
            "Hold a push-up position with your body in a straight line from head to heels. Keep your core engaged and breathe normally.",
            [
                "Don't let your hips sag",
                "Keep your head neutral",
                "Breathe steadily",
                "Start with shorter holds",
            ],
        ),
        (
            "Barbell Rows",
            "Lats, Rhomboids, Biceps",
            Difficulty::Intermediate,
            Category::Upper,
            "https://images.unsplash.com/photo-1584464491033-06628f3a6b7b?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300",
            "Hinge at the hips and lean forward, pull the barbell to your lower chest/upper abdomen, then lower with control.",
            [
                "Keep your back straight",
                "Pull with your elbows",
                "Squeeze your shoulder blades",
                "Don't use momentum",
            ],
        ),
        (
            "Lateral Raises",
            "Shoulders, Upper Traps",
            Difficulty::Beginner,
            Category::Upper,
            "https://images.unsplash.com/photo-1581009137042-c552e485697a?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300",
            "Raise dumbbells out to your sides until they reach shoulder height, then lower with control.",
            [
                "Keep a slight bend in your elbows",
                "Don't swing the weights",
                "Control the movement",
                "Focus on your side delts",
            ],
        ),
        (
            "Hip Thrusts",
            "Glutes, Hamstrings",
            Difficulty::Intermediate,
            Category::Lower,
            "https://images.unsplash.com/photo-1571019614242-c5c5dee9f50b?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300",
            "With your upper back against a bench, drive through your heels to lift your hips up, creating a straight line from knees to shoulders.",
            [
                "Squeeze your glutes at the top",
                "Keep your core engaged",
                "Don't overextend your back",
                "Drive through your heels",
            ],
        ),
        (
            "Push-ups",
            "Chest, Triceps, Core",
            Difficulty::Beginner,
            Category::Upper,
            "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300",
            "Lower your body until your chest nearly touches the ground, then push back up to the starting position.",
            [
                "Keep your body in a straight line",
                "Don't let your hips sag",
                "Control the descent",
                "Full range of motion",
            ],
        ),
    ];

    entries
        .into_iter()
        .map(|(name, muscles, difficulty, category, image, instructions, tips)| {
            Ok(NewExercise {
                // Exercise slugs follow directly from names ("Pull-ups" -> "pull-ups").
                slug: Slug::from_title(name)?,
                name: name.to_string(),
                target_muscles: muscles.to_string(),
                difficulty,
                category,
                image_url: image.to_string(),
                instructions: instructions.to_string(),
                tips: tips.into_iter().map(str::to_string).collect(),
            })
        })
        .collect()
}

fn sample_equipment() -> Vec<NewEquipment> {
    let entries = [
        (
            "Adjustable Dumbbells",
            "Space-saving solution for home workouts",
            "$299-599",
            "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300",
        ),
        (
            "Power Rack System",
            "Complete safety for heavy lifts",
            "$800-1500",
            "https://images.unsplash.com/photo-1534438327276-14e5300c3a48?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300",
        ),
        (
            "Olympic Barbell Set",
            "Professional-grade barbell and plates",
            "$400-800",
            "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300",
        ),
        (
            "Adjustable Bench",
            "Versatile for various exercises",
            "$200-400",
            "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300",
        ),
    ];

    entries
        .into_iter()
        .map(|(name, description, price_range, image)| NewEquipment {
            name: name.to_string(),
            description: description.to_string(),
            price_range: price_range.to_string(),
            image_url: image.to_string(),
        })
        .collect()
}
