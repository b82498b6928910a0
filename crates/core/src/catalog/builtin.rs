//! Endpoint descriptors compiled into the binary.

use crate::endpoint::{EndpointDescriptor, HttpMethod};

struct Seed {
    id: &'static str,
    title: &'static str,
    method: HttpMethod,
    path: &'static str,
    description: &'static str,
    request_example: &'static str,
    response_example: &'static str,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "get-user",
        title: "Get User Profile",
        method: HttpMethod::Get,
        path: "/api/users/:id",
        description: "Retrieve the profile information of a user by their ID.",
        request_example: r#"curl -X GET https://api.example.com/users/123 \
  -H "Authorization: Bearer <token>""#,
        response_example: r#"{
  "id": "123",
  "name": "John Doe",
  "email": "john@example.com",
  "createdAt": "2023-10-01T12:00:00Z"
}"#,
    },
    Seed {
        id: "update-user",
        title: "Update User Profile",
        method: HttpMethod::Put,
        path: "/api/users/:id",
        description: "Update the profile information of a user by their ID.",
        request_example: r#"curl -X PUT https://api.example.com/users/123 \
  -H "Authorization: Bearer <token>" \
  -H "Content-Type: application/json" \
  -d '{
    "name": "Jane Doe",
    "email": "jane@example.com"
  }'"#,
        response_example: r#"{
  "id": "123",
  "name": "Jane Doe",
  "email": "jane@example.com",
  "updatedAt": "2023-10-02T12:00:00Z"
}"#,
    },
    Seed {
        id: "delete-user",
        title: "Delete User",
        method: HttpMethod::Delete,
        path: "/api/users/:id",
        description: "Delete a user by their ID.",
        request_example: r#"curl -X DELETE https://api.example.com/users/123 \
  -H "Authorization: Bearer <token>""#,
        response_example: r#"{
  "message": "User deleted successfully"
}"#,
    },
    Seed {
        id: "create-post",
        title: "Create Post",
        method: HttpMethod::Post,
        path: "/api/posts",
        description: "Create a new post for the authenticated user.",
        request_example: r#"curl -X POST https://api.example.com/posts \
  -H "Authorization: Bearer <token>" \
  -H "Content-Type: application/json" \
  -d '{
    "content": "Hello, world!",
    "visibility": "public"
  }'"#,
        response_example: r#"{
  "id": "456",
  "content": "Hello, world!",
  "visibility": "public",
  "createdAt": "2023-10-01T12:05:00Z"
}"#,
    },
    Seed {
        id: "update-post",
        title: "Update Post",
        method: HttpMethod::Put,
        path: "/api/posts/:id",
        description: "Update an existing post by its ID.",
        request_example: r#"curl -X PUT https://api.example.com/posts/456 \
  -H "Authorization: Bearer <token>" \
  -H "Content-Type: application/json" \
  -d '{
    "content": "Updated content",
    "visibility": "private"
  }'"#,
        response_example: r#"{
  "id": "456",
  "content": "Updated content",
  "visibility": "private",
  "updatedAt": "2023-10-02T12:10:00Z"
}"#,
    },
    Seed {
        id: "delete-post",
        title: "Delete Post",
        method: HttpMethod::Delete,
        path: "/api/posts/:id",
        description: "Delete a post by its ID.",
        request_example: r#"curl -X DELETE https://api.example.com/posts/456 \
  -H "Authorization: Bearer <token>""#,
        response_example: r#"{
  "message": "Post deleted successfully"
}"#,
    },
    Seed {
        id: "create-comment",
        title: "Create Comment",
        method: HttpMethod::Post,
        path: "/api/posts/:postId/comments",
        description: "Add a comment to a post.",
        request_example: r#"curl -X POST https://api.example.com/posts/456/comments \
  -H "Authorization: Bearer <token>" \
  -H "Content-Type: application/json" \
  -d '{
    "content": "Great post!"
  }'"#,
        response_example: r#"{
  "id": "789",
  "content": "Great post!",
  "postId": "456",
  "createdAt": "2023-10-01T12:15:00Z"
}"#,
    },
    Seed {
        id: "get-comments",
        title: "Get Comments",
        method: HttpMethod::Get,
        path: "/api/posts/:postId/comments",
        description: "Retrieve all comments for a post.",
        request_example: r#"curl -X GET https://api.example.com/posts/456/comments \
  -H "Authorization: Bearer <token>""#,
        response_example: r#"[
  {
    "id": "789",
    "content": "Great post!",
    "postId": "456",
    "createdAt": "2023-10-01T12:15:00Z"
  }
]"#,
    },
    Seed {
        id: "login",
        title: "User Login",
        method: HttpMethod::Post,
        path: "/api/auth/login",
        description: "Authenticate a user and receive a token.",
        request_example: r#"curl -X POST https://api.example.com/auth/login \
  -H "Content-Type: application/json" \
  -d '{
    "email": "john@example.com",
    "password": "securepassword"
  }'"#,
        response_example: r#"{
  "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
}"#,
    },
    Seed {
        id: "refresh-token",
        title: "Refresh Token",
        method: HttpMethod::Post,
        path: "/api/auth/refresh",
        description: "Refresh an expired authentication token.",
        request_example: r#"curl -X POST https://api.example.com/auth/refresh \
  -H "Content-Type: application/json" \
  -d '{
    "refreshToken": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
  }'"#,
        response_example: r#"{
  "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
}"#,
    },
];

pub(super) fn endpoints() -> Vec<EndpointDescriptor> {
    SEEDS
        .iter()
        .map(|seed| {
            EndpointDescriptor::new(
                seed.id,
                seed.title,
                seed.method,
                seed.path,
                seed.description,
            )
            .with_examples(seed.request_example, seed.response_example)
        })
        .collect()
}
